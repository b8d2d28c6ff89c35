//! Shared handles every page behavior is wired with.

use std::rc::Rc;

use folio_core::{AccessibilitySettingsStore, Announcer, Politeness, SiteConfig};

use crate::announcer::LiveRegion;
use crate::dom;
use crate::storage::WebStorage;
use crate::surface::DomSurface;

pub const SITE_CONFIG_ID: &str = "site-config";

pub type WebSettingsStore = AccessibilitySettingsStore<WebStorage, DomSurface, Rc<LiveRegion>>;

#[derive(Clone)]
pub struct Page {
    pub config: Rc<SiteConfig>,
    pub announcer: Rc<LiveRegion>,
    pub storage: WebStorage,
    pub settings: Rc<WebSettingsStore>,
}

impl Page {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let announcer = Rc::new(LiveRegion::new(config.announcement_clear_ms));
        let settings = Rc::new(AccessibilitySettingsStore::new(
            WebStorage,
            DomSurface,
            Rc::clone(&announcer),
        ));
        Self {
            config: Rc::new(config),
            announcer,
            storage: WebStorage,
            settings,
        }
    }

    /// Embedded defaults overlaid with the page's `#site-config` block.
    #[must_use]
    pub fn from_document() -> Self {
        let overrides = dom::document()
            .get_element_by_id(SITE_CONFIG_ID)
            .and_then(|script| script.text_content());
        Self::new(SiteConfig::with_page_overrides(overrides.as_deref()))
    }

    pub fn polite(&self, message: &str) {
        self.announcer.announce(message, Politeness::Polite);
    }

    pub fn assertive(&self, message: &str) {
        self.announcer.announce(message, Politeness::Assertive);
    }
}
