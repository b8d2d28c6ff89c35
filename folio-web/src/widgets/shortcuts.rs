use folio_core::shortcuts::{FIELD_SELECTOR, form_fallback_message};
use folio_core::{Shortcut, ShortcutTarget, match_shortcut};
use web_sys::{Element, ScrollLogicalPosition};

use crate::a11y;
use crate::dom;
use crate::page::Page;

/// Element a shortcut lands on and the message to announce for it.
#[must_use]
pub fn resolve(shortcut: &Shortcut) -> Option<(Element, String)> {
    match shortcut.target {
        ShortcutTarget::Selector(selector) => dom::query::<Element>(selector)
            .map(|el| (el, shortcut.message())),
        ShortcutTarget::FirstFieldOf(id) => dom::by_id::<Element>(id)
            .and_then(|form| dom::query_in::<Element>(&form, FIELD_SELECTOR))
            .map(|el| (el, shortcut.message())),
        ShortcutTarget::Id(id) => dom::by_id::<Element>(id).map(|el| (el, shortcut.message())),
        ShortcutTarget::IdOr { id, fallback } => match dom::by_id::<Element>(id) {
            Some(el) => Some((el, shortcut.message())),
            None => dom::query::<Element>(fallback).map(|el| (el, form_fallback_message())),
        },
    }
}

pub fn install(page: &Page) {
    let page = page.clone();
    dom::on_keydown(&dom::document(), move |event| {
        let Some(shortcut) = match_shortcut(&event.key(), event.ctrl_key(), event.alt_key())
        else {
            return;
        };
        let Some((target, message)) = resolve(shortcut) else {
            return;
        };
        event.prevent_default();
        if shortcut.scrolls() {
            dom::scroll_into_view(&target, ScrollLogicalPosition::Start);
        }
        a11y::focus_target(&target);
        page.polite(&message);
    });
}
