//! Remaining-characters counter for the contact message.

use crate::i18n;

pub const DEFAULT_MAX_LENGTH: usize = 1000;
const WARNING_BELOW: usize = 100;
const ERROR_BELOW: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Error,
}

impl CounterLevel {
    /// Inline colour for the counter; `None` clears it.
    #[must_use]
    pub const fn color(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some("var(--warning-color)"),
            Self::Error => Some("var(--error-color)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub max_length: usize,
    pub remaining: usize,
}

impl CounterState {
    /// Length is counted in UTF-16 units, like the textarea's `maxlength`.
    #[must_use]
    pub fn for_text(text: &str, max_length: usize) -> Self {
        Self {
            max_length,
            remaining: max_length.saturating_sub(utf16_len(text)),
        }
    }

    #[must_use]
    pub const fn level(&self) -> CounterLevel {
        if self.remaining < ERROR_BELOW {
            CounterLevel::Error
        } else if self.remaining < WARNING_BELOW {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        i18n::tr(
            "counter.text",
            &[("remaining", &self.remaining.to_string())],
        )
    }

    #[must_use]
    pub fn aria_label(&self) -> String {
        i18n::tr(
            "counter.aria",
            &[
                ("remaining", &self.remaining.to_string()),
                ("max", &self.max_length.to_string()),
            ],
        )
    }
}

/// `maxlength` attribute value, falling back when absent or unusable.
#[must_use]
pub fn max_length_from_attr(attr: Option<&str>, fallback: usize) -> usize {
    attr.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|len| *len > 0)
        .unwrap_or(fallback)
}

#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_by_remaining() {
        let max = 1000;
        assert_eq!(
            CounterState::for_text("", max).level(),
            CounterLevel::Normal
        );
        assert_eq!(
            CounterState::for_text(&"a".repeat(900), max).level(),
            CounterLevel::Normal
        );
        assert_eq!(
            CounterState::for_text(&"a".repeat(901), max).level(),
            CounterLevel::Warning
        );
        assert_eq!(
            CounterState::for_text(&"a".repeat(951), max).level(),
            CounterLevel::Error
        );
        assert_eq!(CounterLevel::Warning.color(), Some("var(--warning-color)"));
        assert_eq!(CounterLevel::Normal.color(), None);
    }

    #[test]
    fn overflow_saturates() {
        let state = CounterState::for_text("abcdef", 4);
        assert_eq!(state.remaining, 0);
    }

    #[test]
    fn counts_utf16_units() {
        assert_eq!(utf16_len("привет"), 6);
        assert_eq!(utf16_len("🎨"), 2);
    }

    #[test]
    fn labels() {
        i18n::set_lang("ru");
        let state = CounterState::for_text("Здравствуйте", 1000);
        assert_eq!(state.text(), "Осталось символов: 988");
        assert_eq!(state.aria_label(), "Осталось 988 символов из 1000");
    }

    #[test]
    fn max_length_attribute() {
        assert_eq!(max_length_from_attr(Some("500"), 1000), 500);
        assert_eq!(max_length_from_attr(Some(" 20 "), 1000), 20);
        assert_eq!(max_length_from_attr(Some("0"), 1000), 1000);
        assert_eq!(max_length_from_attr(Some("lots"), 1000), 1000);
        assert_eq!(max_length_from_attr(None, DEFAULT_MAX_LENGTH), 1000);
    }
}
