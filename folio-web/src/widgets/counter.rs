use folio_core::CounterState;
use folio_core::counter::max_length_from_attr;
use web_sys::{Element, HtmlTextAreaElement};

use crate::dom;
use crate::page::Page;

const MESSAGE_ID: &str = "contactMessage";
const COUNTER_ID: &str = "message-counter";

pub fn render(counter: &Element, state: &CounterState) {
    counter.set_text_content(Some(&state.text()));
    let _ = counter.set_attribute("aria-label", &state.aria_label());
    dom::set_style(counter, "color", state.level().color());
}

pub fn install(page: &Page) {
    let (Some(message), Some(counter)) = (
        dom::by_id::<HtmlTextAreaElement>(MESSAGE_ID),
        dom::by_id::<Element>(COUNTER_ID),
    ) else {
        return;
    };
    let max_length = max_length_from_attr(
        message.get_attribute("maxlength").as_deref(),
        page.config.message_max_length,
    );

    let update = {
        let message = message.clone();
        move || render(&counter, &CounterState::for_text(&message.value(), max_length))
    };
    update();
    // `reset` on the form clears the textarea without an input event.
    if let Some(form) = message.form() {
        let update = update.clone();
        dom::on(&form, "reset", move |_| {
            let update = update.clone();
            dom::set_timeout(0, update);
        });
    }
    dom::on(&message, "input", move |_| update());
}
