use folio_core::{
    AccessibilitySettings, DocumentSurface, KeyValueStore, PresentationFlag, RestoreOutcome, keys,
};
use folio_web::dom;
use folio_web::storage::WebStorage;
use folio_web::surface::DomSurface;
use folio_web::widgets::settings_panel;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::fixture;

const PANEL: &str = r#"
<button class="footer__a11y-btn" aria-expanded="false">A11y</button>
<div id="a11y-settings" role="dialog" aria-modal="true" hidden>
  <button class="modal__close" aria-label="Закрыть">×</button>
  <input type="range" id="font-size-setting" min="80" max="200" value="100">
  <span id="font-size-value">100%</span>
  <input type="range" id="line-height-setting" min="1" max="3" step="0.1" value="1.6">
  <span id="line-height-value">1.6</span>
  <input type="range" id="letter-spacing-setting" min="0" max="5" step="0.5" value="0">
  <span id="letter-spacing-value">0px</span>
  <input type="range" id="focus-thickness-setting" min="1" max="10" value="3">
  <span id="focus-thickness-value">3px</span>
  <input type="checkbox" id="high-contrast-setting">
  <input type="checkbox" id="grayscale-setting">
  <button id="reset-a11y-settings">Reset</button>
  <button id="apply-a11y-settings">Apply</button>
</div>
"#;

const INLINE_PANEL: &str = r#"
<section class="a11y-panel">
  <input type="range" id="font-size-setting" min="80" max="200" value="100">
  <span id="font-size-value">100%</span>
  <input type="checkbox" id="grayscale-setting">
  <button id="reset-a11y-settings">Reset</button>
  <button id="apply-a11y-settings">Apply</button>
</section>
"#;

fn input(id: &str) -> HtmlInputElement {
    fixture::element(id).dyn_into().expect("input element")
}

fn root_var(property: &str) -> String {
    dom::document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .and_then(|el| el.style().get_property_value(property).ok())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn dom_surface_writes_vars_classes_and_controls() {
    let _page = fixture::fresh_page();
    fixture::mount(PANEL);
    let surface = DomSurface;

    surface.set_style_var("--line-height", "2");
    assert_eq!(root_var("--line-height"), "2");
    surface.remove_style_var("--line-height");
    assert_eq!(root_var("--line-height"), "");

    surface.set_flag("grayscale", true);
    assert!(fixture::body_has_class("grayscale"));
    surface.set_flag("grayscale", false);
    assert!(!fixture::body_has_class("grayscale"));

    assert!(surface.set_control_value("font-size-setting", "150"));
    assert_eq!(input("font-size-setting").value(), "150");
    assert!(surface.set_control_checked("high-contrast-setting", true));
    assert!(input("high-contrast-setting").checked());
    assert!(!surface.set_control_value("missing-control", "1"));
    assert!(!surface.set_control_text("missing-read-out", "1"));
}

#[wasm_bindgen_test]
fn apply_persists_and_restores_on_a_new_page() {
    let page = fixture::fresh_page();
    fixture::mount(PANEL);
    settings_panel::install(&page);

    input("font-size-setting").set_value("150");
    input("high-contrast-setting").set_checked(true);
    fixture::click("apply-a11y-settings");

    let stored = WebStorage
        .get(keys::A11Y_SETTINGS)
        .expect("storage readable")
        .expect("settings saved");
    let saved = AccessibilitySettings::from_json(&stored).expect("valid record");
    assert_eq!(saved.font_size_percent, 150);
    assert!(saved.high_contrast);
    assert!(saved.applied);
    assert_eq!(root_var("--font-size-multiplier"), "1.5");
    assert!(fixture::body_has_class(PresentationFlag::HighContrast.class_name()));
    assert!(
        fixture::element("a11y-settings")
            .dyn_into::<HtmlElement>()
            .expect("dialog")
            .hidden(),
        "apply closes the dialog"
    );

    // A fresh document with default controls picks the record back up.
    if let Some(body) = dom::body() {
        body.set_class_name("");
    }
    fixture::mount(PANEL);
    let next_page = folio_web::page::Page::new(folio_core::SiteConfig::default());
    assert_eq!(next_page.settings.restore(), RestoreOutcome::Restored);
    assert_eq!(input("font-size-setting").value(), "150");
    assert_eq!(fixture::element("font-size-value").text_content().as_deref(), Some("150%"));
    assert!(input("high-contrast-setting").checked());
    assert!(fixture::body_has_class("high-contrast"));
}

#[wasm_bindgen_test]
fn inline_panel_without_dialog_applies_and_saves() {
    let page = fixture::fresh_page();
    fixture::mount(INLINE_PANEL);
    settings_panel::install(&page);

    input("font-size-setting").set_value("120");
    input("grayscale-setting").set_checked(true);
    fixture::click("apply-a11y-settings");

    assert_eq!(root_var("--font-size-multiplier"), "1.2");
    assert!(fixture::body_has_class("grayscale"));
    let stored = WebStorage
        .get(keys::A11Y_SETTINGS)
        .expect("storage readable")
        .expect("settings saved");
    let saved = AccessibilitySettings::from_json(&stored).expect("valid record");
    assert_eq!(saved.font_size_percent, 120);
    assert!(saved.grayscale);
    assert!(saved.applied);

    fixture::click("reset-a11y-settings");
    assert_eq!(WebStorage.get(keys::A11Y_SETTINGS).expect("readable"), None);
}

#[wasm_bindgen_test]
fn reset_clears_record_and_document_state() {
    let page = fixture::fresh_page();
    fixture::mount(PANEL);
    settings_panel::install(&page);

    input("grayscale-setting").set_checked(true);
    fixture::click("apply-a11y-settings");
    assert!(fixture::body_has_class("grayscale"));

    fixture::click("reset-a11y-settings");
    assert_eq!(WebStorage.get(keys::A11Y_SETTINGS).expect("readable"), None);
    assert!(!fixture::body_has_class("grayscale"));
    assert!(!input("grayscale-setting").checked());
    assert_eq!(input("font-size-setting").value(), "100");
}

#[wasm_bindgen_test]
fn slider_input_updates_read_out() {
    let page = fixture::fresh_page();
    fixture::mount(PANEL);
    settings_panel::install(&page);

    let slider = input("letter-spacing-setting");
    slider.set_value("2.5");
    fixture::dispatch(&slider, "input");
    assert_eq!(
        fixture::element("letter-spacing-value").text_content().as_deref(),
        Some("2.5px")
    );
}

#[wasm_bindgen_test]
fn opener_shows_dialog_and_focus_stays_inside() {
    let page = fixture::fresh_page();
    fixture::mount(PANEL);
    settings_panel::install(&page);

    let opener = dom::query::<HtmlElement>(".footer__a11y-btn").expect("opener");
    opener.click();
    let dialog = fixture::element("a11y-settings");
    assert!(!dialog.clone().dyn_into::<HtmlElement>().expect("dialog").hidden());
    assert_eq!(opener.get_attribute("aria-expanded").as_deref(), Some("true"));

    let apply = fixture::element("apply-a11y-settings");
    dom::focus(&apply);
    let event = fixture::key_down(&apply, "Tab", false);
    assert!(event.default_prevented());
    let active = dom::document().active_element().expect("focused element");
    assert_eq!(active.class_name(), "modal__close");
}

#[wasm_bindgen_test]
fn unapplied_record_leaves_page_alone() {
    let page = fixture::fresh_page();
    fixture::mount(PANEL);
    let record = AccessibilitySettings {
        grayscale: true,
        ..AccessibilitySettings::default()
    };
    WebStorage
        .set(keys::A11Y_SETTINGS, &record.to_json().expect("encode"))
        .expect("store record");
    assert_eq!(page.settings.restore(), RestoreOutcome::NotApplied);
    assert!(!fixture::body_has_class("grayscale"));
}
