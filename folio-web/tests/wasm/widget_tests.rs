use folio_core::{KeyValueStore, keys};
use folio_web::dom;
use folio_web::storage::WebStorage;
use folio_web::widgets::{captcha, counter, faq, filters, forms, responsive, theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::fixture;

fn hidden(id: &str) -> bool {
    fixture::element(id)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .hidden()
}

#[wasm_bindgen_test]
fn faq_toggle_and_bulk_actions() {
    let page = fixture::fresh_page();
    fixture::mount(
        r#"
        <button class="faq-toggle" aria-expanded="false" aria-controls="a1" id="q1"><span class="faq-icon">➕</span></button>
        <div id="a1" hidden>One</div>
        <button class="faq-toggle" aria-expanded="false" aria-controls="a2" id="q2"><span class="faq-icon">➕</span></button>
        <div id="a2" hidden>Two</div>
        <button id="expand-all-faq">All</button>
        <button id="collapse-all-faq">None</button>
        "#,
    );
    faq::install(&page);

    fixture::click("q1");
    assert_eq!(fixture::element("q1").get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(!hidden("a1"));
    assert!(hidden("a2"));

    fixture::click("expand-all-faq");
    assert!(!hidden("a1"), "already open answers stay open");
    assert!(!hidden("a2"));

    fixture::click("collapse-all-faq");
    assert!(hidden("a1"));
    assert!(hidden("a2"));
    let icon = dom::query::<web_sys::Element>("#q2 .faq-icon").expect("icon");
    assert_eq!(icon.text_content().as_deref(), Some("➕"));
}

#[wasm_bindgen_test]
fn project_filters_hide_unmatched_cards() {
    let _page = fixture::fresh_page();
    fixture::mount(
        r#"
        <label class="projects__filter" data-filter="all" aria-pressed="true" id="f-all">All</label>
        <label class="projects__filter" data-filter="web" aria-pressed="false" id="f-web">Web</label>
        <article class="project-card" data-tags="web design" id="c1"></article>
        <article class="project-card" data-tags="print" id="c2"></article>
        "#,
    );
    filters::install();
    assert!(!hidden("c1") && !hidden("c2"));

    fixture::click("f-web");
    assert_eq!(fixture::element("f-web").get_attribute("aria-pressed").as_deref(), Some("true"));
    assert_eq!(fixture::element("f-all").get_attribute("aria-pressed").as_deref(), Some("false"));
    assert!(fixture::element("f-web").class_list().contains("projects__filter--active"));
    assert!(!hidden("c1"));
    assert!(hidden("c2"));

    fixture::click("f-all");
    assert!(!hidden("c2"));
}

#[wasm_bindgen_test]
fn counter_tracks_remaining_characters() {
    let page = fixture::fresh_page();
    fixture::mount(
        r#"<textarea id="contactMessage" maxlength="200"></textarea><div id="message-counter"></div>"#,
    );
    counter::install(&page);
    let counter = fixture::element("message-counter");
    assert_eq!(counter.text_content().as_deref(), Some("Осталось символов: 200"));

    let message: HtmlTextAreaElement = fixture::element("contactMessage").dyn_into().expect("textarea");
    message.set_value(&"x".repeat(160));
    fixture::dispatch(&message, "input");
    assert_eq!(counter.text_content().as_deref(), Some("Осталось символов: 40"));
    assert_eq!(
        counter.get_attribute("aria-label").as_deref(),
        Some("Осталось 40 символов из 200")
    );
}

#[wasm_bindgen_test]
fn wrong_captcha_answer_is_rejected_and_replaced() {
    let page = fixture::fresh_page();
    fixture::mount(
        r#"<span id="captcha-question"></span><input id="captcha"><div id="captcha-error"></div>"#,
    );
    let widget = captcha::install(&page).expect("captcha present");
    let question = fixture::element("captcha-question")
        .text_content()
        .unwrap_or_default();
    assert!(!question.is_empty());

    let input: HtmlInputElement = fixture::element("captcha").dyn_into().expect("input");
    input.set_value("not a number");
    assert!(!widget.verify(&page));
    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));
    assert_eq!(
        fixture::element("captcha-error").text_content().as_deref(),
        Some("Неверный ответ. Попробуйте еще раз.")
    );
}

#[wasm_bindgen_test]
fn required_check_marks_blank_fields() {
    let page = fixture::fresh_page();
    fixture::mount(
        r#"<form id="f"><div><input id="name" required></div><div><input id="note"></div></form>"#,
    );
    let form: HtmlFormElement = fixture::element("f").dyn_into().expect("form");
    assert!(!forms::check_required(&page, &form));

    let name = fixture::element("name");
    assert_eq!(name.get_attribute("aria-invalid").as_deref(), Some("true"));
    assert_eq!(
        fixture::element("name-error").text_content().as_deref(),
        Some("Это поле обязательно для заполнения")
    );
    assert!(fixture::element("note").get_attribute("aria-invalid").is_none());
    assert!(name.class_list().contains(forms::FIELD_ERROR_CLASS));
    assert!(!fixture::element("note").class_list().contains(forms::FIELD_ERROR_CLASS));
    assert_eq!(
        dom::document().active_element().map(|el| el.id()).as_deref(),
        Some("name")
    );

    name.clone()
        .dyn_into::<HtmlInputElement>()
        .expect("input")
        .set_value("Анна");
    assert!(forms::check_required(&page, &form));
    assert!(name.get_attribute("aria-invalid").is_none());
    assert!(!name.class_list().contains(forms::FIELD_ERROR_CLASS));
}

#[wasm_bindgen_test]
fn typing_clears_field_error_class() {
    let page = fixture::fresh_page();
    fixture::mount(r#"<form id="f"><div><input id="email" required></div></form>"#);
    forms::install(&page);
    let form: HtmlFormElement = fixture::element("f").dyn_into().expect("form");
    assert!(!forms::check_required(&page, &form));

    let email = fixture::element("email");
    assert!(email.class_list().contains(forms::FIELD_ERROR_CLASS));
    email
        .clone()
        .dyn_into::<HtmlInputElement>()
        .expect("input")
        .set_value("a");
    fixture::dispatch(&email, "input");
    assert!(!email.class_list().contains(forms::FIELD_ERROR_CLASS));
    assert!(email.get_attribute("aria-invalid").is_none());
}

#[wasm_bindgen_test]
fn data_saver_drops_backgrounds_and_loads_images_eagerly() {
    let _page = fixture::fresh_page();
    fixture::mount(
        r#"<div id="hero" class="bg-image" style="background-image: url(hero.jpg)"></div>
<img id="shot" src="shot.png" alt="" loading="lazy">"#,
    );
    responsive::apply_data_saver();

    assert!(fixture::body_has_class("save-data"));
    let hero: HtmlElement = fixture::element("hero").dyn_into().expect("hero");
    assert_eq!(
        hero.style().get_property_value("background-image").ok().as_deref(),
        Some("none")
    );
    assert_eq!(
        fixture::element("shot").get_attribute("loading").as_deref(),
        Some("eager")
    );
}

#[wasm_bindgen_test]
fn theme_toggle_persists_choice() {
    let page = fixture::fresh_page();
    WebStorage.set(keys::THEME, "light").expect("seed theme");
    fixture::mount(r#"<button id="theme-toggle"></button>"#);
    theme::install(&page);
    assert!(fixture::body_has_class("theme-light"));

    fixture::click("theme-toggle");
    assert!(fixture::body_has_class("theme-dark"));
    assert!(!fixture::body_has_class("theme-light"));
    assert_eq!(WebStorage.get(keys::THEME).expect("read").as_deref(), Some("dark"));
}
