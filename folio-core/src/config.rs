//! Site-wide delays and thresholds.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_SITE_CONFIG: &str = include_str!("../../folio-web/static/config/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("site config must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "defaults::announcement_clear_ms")]
    pub announcement_clear_ms: u32,
    #[serde(default = "defaults::cookie_notice_delay_ms")]
    pub cookie_notice_delay_ms: u32,
    #[serde(default = "defaults::contrast_check_delay_ms")]
    pub contrast_check_delay_ms: u32,
    #[serde(default = "defaults::resize_debounce_ms")]
    pub resize_debounce_ms: u32,
    #[serde(default = "defaults::mobile_breakpoint_px")]
    pub mobile_breakpoint_px: u32,
    #[serde(default = "defaults::status_refresh_ms")]
    pub status_refresh_ms: u32,
    #[serde(default = "defaults::submit_delay_ms")]
    pub submit_delay_ms: u32,
    #[serde(default = "defaults::success_dismiss_ms")]
    pub success_dismiss_ms: u32,
    #[serde(default = "defaults::draft_status_ms")]
    pub draft_status_ms: u32,
    #[serde(default = "defaults::message_max_length")]
    pub message_max_length: usize,
    #[serde(default = "defaults::settings_page_href")]
    pub settings_page_href: String,
}

mod defaults {
    pub(super) const fn announcement_clear_ms() -> u32 {
        5000
    }
    pub(super) const fn cookie_notice_delay_ms() -> u32 {
        2000
    }
    pub(super) const fn contrast_check_delay_ms() -> u32 {
        1000
    }
    pub(super) const fn resize_debounce_ms() -> u32 {
        250
    }
    pub(super) const fn mobile_breakpoint_px() -> u32 {
        768
    }
    pub(super) const fn status_refresh_ms() -> u32 {
        60_000
    }
    pub(super) const fn submit_delay_ms() -> u32 {
        2000
    }
    pub(super) const fn success_dismiss_ms() -> u32 {
        10_000
    }
    pub(super) const fn draft_status_ms() -> u32 {
        5000
    }
    pub(super) const fn message_max_length() -> usize {
        crate::counter::DEFAULT_MAX_LENGTH
    }
    pub(super) fn settings_page_href() -> String {
        "/pages/contacts.html#a11y-settings".to_string()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            announcement_clear_ms: defaults::announcement_clear_ms(),
            cookie_notice_delay_ms: defaults::cookie_notice_delay_ms(),
            contrast_check_delay_ms: defaults::contrast_check_delay_ms(),
            resize_debounce_ms: defaults::resize_debounce_ms(),
            mobile_breakpoint_px: defaults::mobile_breakpoint_px(),
            status_refresh_ms: defaults::status_refresh_ms(),
            submit_delay_ms: defaults::submit_delay_ms(),
            success_dismiss_ms: defaults::success_dismiss_ms(),
            draft_status_ms: defaults::draft_status_ms(),
            message_max_length: defaults::message_max_length(),
            settings_page_href: defaults::settings_page_href(),
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_SITE_CONFIG).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has a field of the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlay the fields present in `json` onto `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an object or the merged result does
    /// not form a valid config.
    pub fn merged_with(&self, json: &str) -> Result<Self, ConfigError> {
        let Value::Object(overrides) = serde_json::from_str::<Value>(json)? else {
            return Err(ConfigError::NotAnObject);
        };
        let mut base = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut base {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(base)?)
    }

    /// Embedded defaults, overridden by a page-level block when it parses.
    #[must_use]
    pub fn with_page_overrides(page_json: Option<&str>) -> Self {
        let base = Self::load_from_static();
        let Some(json) = page_json.filter(|json| !json.trim().is_empty()) else {
            return base;
        };
        base.merged_with(json).unwrap_or_else(|err| {
            log::warn!("ignoring page site config: {err}");
            base
        })
    }
}
