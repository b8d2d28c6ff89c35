use folio_core::i18n;
use folio_core::{SiteConfig, Theme};
use folio_web::announcer::LIVE_REGION_ID;
use folio_web::dom;
use folio_web::page::SITE_CONFIG_ID;
use folio_web::widgets::{forms, settings_panel, theme};

/// Message keys the DOM bindings look up directly.
const WIDGET_KEYS: &[&str] = &[
    "a11y.settings.opened",
    "a11y.settings.closed",
    "a11y.contrast_warning",
    "a11y.image_failed",
    "a11y.image_failed_alt",
    "validation.required_announce",
    "captcha.wrong",
    "captcha.wrong_announce",
    "captcha.refreshed",
    "draft.saved_status",
    "draft.saved",
    "draft.confirm",
    "draft.restored",
    "submit.sending",
    "submit.sending_aria",
    "submit.send_aria",
    "submit.success_title",
    "submit.success_body",
    "submit.close",
    "submit.close_aria",
    "submit.closed",
    "submit.sent",
    "cookies.notice",
    "cookies.accepted",
    "cookies.rejected",
    "cookies.settings_unavailable",
];

#[test]
fn widget_messages_exist_in_every_locale() {
    for lang in ["ru", "en"] {
        assert!(i18n::set_lang(lang), "locale {lang} should load");
        for key in WIDGET_KEYS {
            let text = i18n::t(key);
            assert_ne!(&text, key, "{key} is missing from {lang}");
            assert!(!text.trim().is_empty(), "{key} is empty in {lang}");
        }
    }
    i18n::set_lang("ru");
}

#[test]
fn english_catalog_differs_from_default() {
    i18n::set_lang("en");
    let english = i18n::t("submit.sent");
    i18n::set_lang("ru");
    assert_ne!(english, i18n::t("submit.sent"));
}

#[test]
fn element_ids_match_page_markup() {
    assert_eq!(LIVE_REGION_ID, "a11y-live-region");
    assert_eq!(SITE_CONFIG_ID, "site-config");
    assert_eq!(settings_panel::DIALOG_ID, "a11y-settings");
    assert_eq!(forms::CONTACT_FORM_ID, "contactForm");
    assert_eq!(theme::TOGGLE_ID, "theme-toggle");
}

#[test]
fn bool_attr_spells_aria_values() {
    assert_eq!(dom::bool_attr(true), "true");
    assert_eq!(dom::bool_attr(false), "false");
}

#[test]
fn page_overrides_reach_widget_timings() {
    let config = SiteConfig::with_page_overrides(Some(r#"{"submitDelayMs": 10}"#));
    assert_eq!(config.submit_delay_ms, 10);
    assert_eq!(config.success_dismiss_ms, SiteConfig::default().success_dismiss_ms);
}

#[test]
fn theme_classes_are_distinct() {
    assert_ne!(Theme::Dark.body_class(), Theme::Light.body_class());
}
