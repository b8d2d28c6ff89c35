use crate::i18n::bundle::with_bundle;
use serde_json::Value;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(obj, |current, part| current.get(part))
}

fn render_value(value: &Value, args: &[(&str, &str)]) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    for (name, replacement) in args {
        text = text.replace(&format!("{{{{{name}}}}}"), replacement);
        text = text.replace(&format!("{{{name}}}"), replacement);
    }
    Some(text)
}

fn resolve(key: &str, args: &[(&str, &str)]) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language.
///
/// Falls back to Russian, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, &[])
}

/// Translate a key with `{name}` / `{{name}}` substitution.
#[must_use]
pub fn tr(key: &str, args: &[(&str, &str)]) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let resolved = render_value(&value, &[("name", "Tester")]).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn nested_keys_resolve_and_missing_keys_echo() {
        crate::i18n::set_lang("ru");
        assert_eq!(t("faq.opened"), "Ответ открыт");
        assert_eq!(
            tr("text_scale.increased", &[("size", "110")]),
            "Размер текста увеличен до 110%"
        );
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("faq"), "faq");
    }
}
