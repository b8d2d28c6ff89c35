//! Screen reader live region.

use std::cell::Cell;

use folio_core::{Announcer, Politeness};

use crate::dom;

pub const LIVE_REGION_ID: &str = "a11y-live-region";

/// Announces through `#a11y-live-region`, creating it on first use. The text
/// is cleared after `clear_after_ms`; a newer message restarts the timer.
#[derive(Debug)]
pub struct LiveRegion {
    clear_after_ms: u32,
    pending_clear: Cell<Option<i32>>,
}

impl LiveRegion {
    #[must_use]
    pub const fn new(clear_after_ms: u32) -> Self {
        Self {
            clear_after_ms,
            pending_clear: Cell::new(None),
        }
    }

    fn region() -> Option<web_sys::Element> {
        let doc = dom::document();
        if let Some(existing) = doc.get_element_by_id(LIVE_REGION_ID) {
            return Some(existing);
        }
        let region = doc.create_element("div").ok()?;
        region.set_id(LIVE_REGION_ID);
        let _ = region.set_attribute("aria-live", Politeness::Polite.as_str());
        let _ = region.set_attribute("aria-atomic", "true");
        region.set_class_name("sr-only");
        dom::body()?.append_child(&region).ok()?;
        Some(region)
    }
}

impl Announcer for LiveRegion {
    fn announce(&self, message: &str, politeness: Politeness) {
        let Some(region) = Self::region() else {
            log::warn!("no live region for announcement: {message}");
            return;
        };
        let _ = region.set_attribute("aria-live", politeness.as_str());
        region.set_text_content(Some(message));

        if let Some(previous) = self.pending_clear.take() {
            dom::clear_timeout(previous);
        }
        let handle = dom::set_timeout(self.clear_after_ms, move || {
            region.set_text_content(Some(""));
        });
        self.pending_clear.set(handle);
    }
}
