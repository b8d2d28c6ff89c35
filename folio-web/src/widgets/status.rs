use folio_core::availability::weekday_from_sunday_index;
use folio_core::{StatusView, status_at};
use web_sys::Element;

use crate::dom;
use crate::page::Page;

const INDICATOR: &str = ".status-indicator";

/// Availability for the visitor's local time.
#[must_use]
pub fn current_status() -> StatusView {
    let now = js_sys::Date::new_0();
    status_at(weekday_from_sunday_index(now.get_day()), now.get_hours())
}

pub fn render(indicator: &Element, status: &StatusView) {
    indicator.set_class_name(&status.class_attr());
    indicator.set_text_content(Some(&status.text));
    let _ = indicator.set_attribute("aria-label", &status.label);
}

pub fn install(page: &Page) {
    let Some(indicator) = dom::query::<Element>(INDICATOR) else {
        return;
    };
    render(&indicator, &current_status());
    dom::set_interval(page.config.status_refresh_ms, move || {
        render(&indicator, &current_status());
    });
}
