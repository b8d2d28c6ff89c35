//! Form field validation messages.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::i18n;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// The subset of a browser validity state the messages depend on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidity {
    pub valid: bool,
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
}

impl FieldValidity {
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            value_missing: false,
            type_mismatch: false,
            too_short: false,
            too_long: false,
        }
    }
}

/// Attributes that shape the message text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAttrs<'a> {
    pub input_type: &'a str,
    pub min_length: Option<&'a str>,
    pub max_length: Option<&'a str>,
}

/// Message for an invalid field, or `None` when the field is valid.
#[must_use]
pub fn validation_message(validity: FieldValidity, attrs: FieldAttrs<'_>) -> Option<String> {
    if validity.valid {
        return None;
    }
    let message = if validity.value_missing {
        required_message()
    } else if attrs.input_type == "email" && validity.type_mismatch {
        i18n::t("validation.email")
    } else if validity.too_short {
        match attrs.min_length.filter(|m| !m.is_empty()) {
            Some(min) => i18n::tr("validation.too_short_min", &[("min", min)]),
            None => i18n::t("validation.too_short"),
        }
    } else if validity.too_long {
        match attrs.max_length.filter(|m| !m.is_empty()) {
            Some(max) => i18n::tr("validation.too_long_max", &[("max", max)]),
            None => i18n::t("validation.too_long"),
        }
    } else {
        i18n::t("validation.invalid")
    };
    Some(message)
}

#[must_use]
pub fn required_message() -> String {
    i18n::t("validation.required")
}

/// Required fields only count as filled when they hold non-whitespace text.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Id of the element carrying a field's error text.
#[must_use]
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Loose email shape check, close to what browsers accept for
/// `type="email"`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_some_and(|re| re.is_match(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> FieldValidity {
        FieldValidity::default()
    }

    #[test]
    fn valid_field_has_no_message() {
        assert_eq!(
            validation_message(FieldValidity::valid(), FieldAttrs::default()),
            None
        );
    }

    #[test]
    fn messages_follow_validity_priority() {
        i18n::set_lang("ru");
        let missing = FieldValidity {
            value_missing: true,
            type_mismatch: true,
            ..invalid()
        };
        let attrs = FieldAttrs {
            input_type: "email",
            ..FieldAttrs::default()
        };
        assert_eq!(
            validation_message(missing, attrs).as_deref(),
            Some("Это поле обязательно для заполнения")
        );

        let mismatch = FieldValidity {
            type_mismatch: true,
            ..invalid()
        };
        assert_eq!(
            validation_message(mismatch, attrs).as_deref(),
            Some("Введите корректный email")
        );
        assert_eq!(
            validation_message(mismatch, FieldAttrs::default()).as_deref(),
            Some("Неверное значение.")
        );
    }

    #[test]
    fn length_messages_include_limits_when_known() {
        i18n::set_lang("ru");
        let short = FieldValidity {
            too_short: true,
            ..invalid()
        };
        let attrs = FieldAttrs {
            input_type: "text",
            min_length: Some("2"),
            max_length: Some("1000"),
        };
        assert_eq!(
            validation_message(short, attrs).as_deref(),
            Some("Слишком коротко, минимум 2 символов")
        );
        assert_eq!(
            validation_message(short, FieldAttrs::default()).as_deref(),
            Some("Слишком коротко")
        );
        let long = FieldValidity {
            too_long: true,
            ..invalid()
        };
        assert_eq!(
            validation_message(long, attrs).as_deref(),
            Some("Слишком длинно, максимум 1000 символов")
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("anna@example.ru"));
        assert!(is_valid_email("  a.b+c@mail.example.com "));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("anna example@x.ru"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn blank_and_error_ids() {
        assert!(is_blank("   \n"));
        assert!(!is_blank(" x "));
        assert_eq!(error_element_id("contactEmail"), "contactEmail-error");
    }
}
