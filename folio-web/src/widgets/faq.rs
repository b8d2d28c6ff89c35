use folio_core::{BulkAction, FaqToggle};
use web_sys::Element;

use crate::dom;
use crate::page::Page;

const TOGGLES: &str = ".faq-toggle";
const ICON: &str = ".faq-icon";
const EXPAND_ALL_ID: &str = "expand-all-faq";
const COLLAPSE_ALL_ID: &str = "collapse-all-faq";

/// Flip one question and announce the new state.
pub fn toggle(page: &Page, button: &Element) {
    let next = FaqToggle::from_attr(button.get_attribute("aria-expanded").as_deref()).toggled();
    let _ = button.set_attribute("aria-expanded", next.aria_value());
    if let Some(answer) = button
        .get_attribute("aria-controls")
        .and_then(|id| dom::by_id::<web_sys::HtmlElement>(&id))
    {
        answer.set_hidden(next.answer_hidden());
    }
    if let Some(icon) = dom::query_in::<Element>(button, ICON) {
        icon.set_text_content(Some(next.icon()));
    }
    page.polite(&next.announcement());
}

fn bulk(page: &Page, action: BulkAction) {
    for button in dom::query_all(TOGGLES) {
        if action.should_toggle(button.get_attribute("aria-expanded").as_deref()) {
            toggle(page, &button);
        }
    }
    page.polite(&action.announcement());
}

pub fn install(page: &Page) {
    for button in dom::query_all(TOGGLES) {
        let (page_for_click, target) = (page.clone(), button.clone());
        dom::on(&button, "click", move |_| toggle(&page_for_click, &target));

        let target = button.clone();
        dom::on_keydown(&button, move |event| {
            if dom::is_activation_key(&event) {
                event.prevent_default();
                dom::click(&target);
            }
        });
    }

    for (id, action) in [
        (EXPAND_ALL_ID, BulkAction::ExpandAll),
        (COLLAPSE_ALL_ID, BulkAction::CollapseAll),
    ] {
        if let Some(button) = dom::by_id::<Element>(id) {
            let page = page.clone();
            dom::on(&button, "click", move |_| bulk(&page, action));
        }
    }
}
