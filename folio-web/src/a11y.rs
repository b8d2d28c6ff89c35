// Accessibility helpers applied to every page

use folio_core::KeyValueStore;
use folio_core::i18n;
use folio_core::keys;
use folio_core::navigation::is_current_link;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::page::Page;

pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;
const SKIP_TARGET_TABINDEX_MS: u32 = 100;
const CONTRAST_CHECK_SELECTOR: &str = "p, span, h1, h2, h3, h4, h5, h6, a, button";

/// Install every document-wide helper.
pub fn install(page: &Page) {
    skip_link();
    escape_closes_dialog();
    table_scopes();
    adaptive_table_labels();
    mark_current_links();
    role_button_keys();
    schedule_contrast_check(page);
}

/// `.skip-link` moves focus to its target, which is focusable for a moment.
pub fn skip_link() {
    let Some(link) = dom::query::<Element>(".skip-link") else {
        return;
    };
    let href_source = link.clone();
    dom::on(&link, "click", move |event| {
        event.prevent_default();
        let Some(target_selector) = href_source.get_attribute("href") else {
            return;
        };
        let Some(target) = dom::query::<Element>(&target_selector) else {
            return;
        };
        let _ = target.set_attribute("tabindex", "-1");
        dom::focus(&target);
        dom::set_timeout(SKIP_TARGET_TABINDEX_MS, move || {
            let _ = target.remove_attribute("tabindex");
        });
    });
}

/// Keep Tab and Shift+Tab cycling inside `container`. Focusable descendants
/// are looked up on each key press so hidden or added controls are honoured.
pub fn trap_focus(container: &Element) {
    let scope = container.clone();
    dom::on_keydown(container, move |event: KeyboardEvent| {
        if event.key() != "Tab" {
            return;
        }
        let focusables = dom::query_all_in(&scope, FOCUSABLE_SELECTOR);
        let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
            return;
        };
        let active = dom::document().active_element();
        if event.shift_key() && active.as_ref() == Some(first) {
            event.prevent_default();
            dom::focus(last);
        } else if !event.shift_key() && active.as_ref() == Some(last) {
            event.prevent_default();
            dom::focus(first);
        }
    });
}

/// Escape presses the close button of the visible modal dialog.
pub fn escape_closes_dialog() {
    dom::on_keydown(&dom::document(), |event| {
        if event.key() != "Escape" {
            return;
        }
        let Some(modal) = dom::query::<HtmlElement>(r#"[role="dialog"][aria-modal="true"]"#)
        else {
            return;
        };
        let display_none = modal
            .style()
            .get_property_value("display")
            .is_ok_and(|display| display == "none");
        if modal.hidden() || display_none {
            return;
        }
        if let Some(close) = dom::query_in::<Element>(
            &modal,
            r#"[aria-label*="закрыть" i], [aria-label*="close" i]"#,
        ) {
            dom::click(&close);
        }
    });
}

/// Tables without explicit header scopes get column and row scopes.
pub fn table_scopes() {
    for table in dom::query_all("table:not([role])") {
        if dom::query_in::<Element>(&table, "th[scope]").is_some() {
            continue;
        }
        for header in dom::query_all_in(&table, "th") {
            let _ = header.set_attribute("scope", "col");
        }
        for row in dom::query_all_in(&table, "tbody tr") {
            if let Some(first) = dom::query_in::<Element>(&row, "th") {
                let _ = first.set_attribute("scope", "row");
            }
        }
    }
}

/// `.adaptive-table` cells carry their column header for narrow layouts.
pub fn adaptive_table_labels() {
    for table in dom::query_all(".adaptive-table") {
        let headers: Vec<String> = dom::query_all_in(&table, "th")
            .iter()
            .map(|th| th.text_content().unwrap_or_default())
            .collect();
        for row in dom::query_all_in(&table, "tbody tr") {
            for (cell, header) in dom::query_all_in(&row, "td").iter().zip(&headers) {
                let _ = cell.set_attribute("data-label", header);
            }
        }
    }
}

pub fn mark_current_links() {
    let Ok(path) = dom::window().location().pathname() else {
        return;
    };
    for link in dom::query_all("nav a") {
        let href = link.get_attribute("href").unwrap_or_default();
        let _ = if is_current_link(&path, &href) {
            link.set_attribute("aria-current", "page")
        } else {
            link.remove_attribute("aria-current")
        };
    }
}

/// Enter and Space activate non-button elements with `role="button"`.
pub fn role_button_keys() {
    for button in dom::query_all(r#"[role="button"]"#) {
        let target = button.clone();
        dom::on_keydown(&button, move |event| {
            if dom::is_activation_key(&event) {
                event.prevent_default();
                dom::click(&target);
            }
        });
    }
}

fn schedule_contrast_check(page: &Page) {
    let page = page.clone();
    dom::set_timeout(page.config.contrast_check_delay_ms, move || {
        contrast_check(&page);
    });
}

/// Warn once per browser when text is drawn in its own background colour.
pub fn contrast_check(page: &Page) {
    if page
        .storage
        .get(keys::CONTRAST_WARNING_SHOWN)
        .ok()
        .flatten()
        .is_some()
    {
        return;
    }
    let window = dom::window();
    let low_contrast = dom::query_all(CONTRAST_CHECK_SELECTOR)
        .iter()
        .filter_map(|el| window.get_computed_style(el).ok().flatten())
        .any(|style| {
            let color = style.get_property_value("color").unwrap_or_default();
            let background = style
                .get_property_value("background-color")
                .unwrap_or_default();
            !color.is_empty() && color == background
        });
    if low_contrast {
        page.polite(&i18n::t("a11y.contrast_warning"));
        if let Err(err) = page.storage.set(keys::CONTRAST_WARNING_SHOWN, "true") {
            log::warn!("could not remember contrast warning: {err}");
        }
    }
}

/// Focus `element`, making it programmatically focusable if needed.
pub fn focus_target(element: &Element) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if html.tab_index() < 0 && !element.has_attribute("tabindex") {
            let _ = element.set_attribute("tabindex", "-1");
        }
        let _ = html.focus();
    }
}
