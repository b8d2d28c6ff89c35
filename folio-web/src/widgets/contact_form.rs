//! Contact form submission: required fields, the arithmetic check, then a
//! simulated send with a dismissible confirmation.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::draft::discard_draft;
use folio_core::i18n;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, ScrollLogicalPosition};

use crate::dom;
use crate::page::Page;
use crate::widgets::captcha::CaptchaWidget;
use crate::widgets::forms::{self, CONTACT_FORM_ID};

const SUBMIT_BUTTON: &str = r#"[type="submit"]"#;
const SUCCESS_CLASS: &str = "success-message";
const CLOSE_CLASS: &str = "button button--small close-message";

struct SubmitButton {
    button: HtmlButtonElement,
    original_text: String,
}

impl SubmitButton {
    fn find(form: &HtmlFormElement) -> Option<Self> {
        let button = dom::query_in::<HtmlButtonElement>(form, SUBMIT_BUTTON)?;
        let original_text = button.text_content().unwrap_or_default();
        Some(Self {
            button,
            original_text,
        })
    }

    fn sending(&self) {
        self.button.set_disabled(true);
        self.button
            .set_text_content(Some(&i18n::t("submit.sending")));
        let _ = self
            .button
            .set_attribute("aria-label", &i18n::t("submit.sending_aria"));
    }

    fn restore(&self) {
        self.button.set_disabled(false);
        self.button.set_text_content(Some(&self.original_text));
        let _ = self
            .button
            .set_attribute("aria-label", &i18n::t("submit.send_aria"));
    }
}

fn child(tag: &str, text: &str) -> Option<Element> {
    let element = dom::document().create_element(tag).ok()?;
    element.set_text_content(Some(text));
    Some(element)
}

/// Build the confirmation alert shown after a send.
fn success_message(page: &Page) -> Option<Element> {
    let message = dom::document().create_element("div").ok()?;
    message.set_class_name(SUCCESS_CLASS);
    message.set_attribute("role", "alert").ok()?;
    message.set_attribute("aria-live", "assertive").ok()?;

    let title = child("h4", &i18n::t("submit.success_title"))?;
    let body = child("p", &i18n::t("submit.success_body"))?;
    let close = child("button", &i18n::t("submit.close"))?;
    close.set_class_name(CLOSE_CLASS);
    close.set_attribute("type", "button").ok()?;
    close
        .set_attribute("aria-label", &i18n::t("submit.close_aria"))
        .ok()?;
    for part in [&title, &body, &close] {
        message.append_child(part).ok()?;
    }

    let (page, target) = (page.clone(), message.clone());
    dom::on(&close, "click", move |_| {
        target.remove();
        page.polite(&i18n::t("submit.closed"));
    });
    Some(message)
}

fn finish(page: &Page, form: &HtmlFormElement, captcha: Option<&CaptchaWidget>) {
    if let Some(message) = success_message(page) {
        if let Some(parent) = form.parent_node() {
            let _ = parent.insert_before(&message, form.next_sibling().as_ref());
        }
        dom::scroll_into_view(&message, ScrollLogicalPosition::Center);
        dom::set_timeout(page.config.success_dismiss_ms, move || {
            if message.is_connected() {
                message.remove();
            }
        });
    }

    form.reset();
    if let Err(err) = discard_draft(&page.storage) {
        log::warn!("could not discard contact draft: {err}");
    }
    if let Some(captcha) = captcha {
        captcha.regenerate();
    }
    page.assertive(&i18n::t("submit.sent"));
}

pub fn install(page: &Page, captcha: Option<CaptchaWidget>) {
    let Some(form) = dom::by_id::<HtmlFormElement>(CONTACT_FORM_ID) else {
        return;
    };
    let in_flight = Rc::new(Cell::new(false));
    let page = page.clone();
    let target = form.clone();

    dom::on(&form, "submit", move |event| {
        event.prevent_default();
        if in_flight.get() || !forms::check_required(&page, &target) {
            return;
        }
        if captcha.as_ref().is_some_and(|captcha| !captcha.verify(&page)) {
            return;
        }

        let button = SubmitButton::find(&target);
        if let Some(button) = &button {
            button.sending();
        }
        in_flight.set(true);

        let (page, form, captcha, in_flight) = (
            page.clone(),
            target.clone(),
            captcha.clone(),
            Rc::clone(&in_flight),
        );
        let delay = i32::try_from(page.config.submit_delay_ms).unwrap_or(i32::MAX);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::sleep_ms(delay).await {
                log::warn!("submit timer failed: {}", dom::js_error_message(&err));
            }
            if let Some(button) = &button {
                button.restore();
            }
            finish(&page, &form, captcha.as_ref());
            in_flight.set(false);
        });
    });
}
