use folio_core::{KeyValueStore, Theme, keys};
use web_sys::HtmlElement;

use crate::dom;
use crate::page::Page;

pub const TOGGLE_ID: &str = "theme-toggle";
const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";

fn prefers_dark() -> bool {
    dom::window()
        .match_media(PREFERS_DARK)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Theme currently shown, read from the body classes.
#[must_use]
pub fn current_theme() -> Theme {
    let dark = dom::body().is_some_and(|body| body.class_list().contains(Theme::Dark.body_class()));
    if dark { Theme::Dark } else { Theme::Light }
}

pub fn show(theme: Theme, toggle: &HtmlElement) {
    if let Some(body) = dom::body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force(Theme::Dark.body_class(), theme == Theme::Dark);
        let _ = classes.toggle_with_force(Theme::Light.body_class(), theme == Theme::Light);
    }
    toggle.set_text_content(Some(&theme.toggle_text()));
    let _ = toggle.set_attribute("aria-label", &theme.toggle_aria_label());
}

pub fn install(page: &Page) {
    let Some(toggle) = dom::by_id::<HtmlElement>(TOGGLE_ID) else {
        return;
    };

    let saved = page.storage.get(keys::THEME).ok().flatten();
    show(Theme::resolve(saved.as_deref(), prefers_dark()), &toggle);

    let page = page.clone();
    let button = toggle.clone();
    dom::on(&toggle, "click", move |_| {
        let next = current_theme().toggled();
        show(next, &button);
        page.polite(&next.changed_message());
        if let Err(err) = page.storage.set(keys::THEME, next.as_str()) {
            log::warn!("could not persist theme: {err}");
        }
    });
}
