//! Folio Core
//!
//! Platform-agnostic behavior for the Folio portfolio site: the persisted
//! accessibility settings and their effect on the page, cookie consent, and
//! the decision logic behind every page widget. DOM access goes through the
//! [`DocumentSurface`], [`KeyValueStore`] and [`Announcer`] ports so the same
//! code runs in the browser and against in-memory fakes.

pub mod announce;
pub mod availability;
pub mod captcha;
pub mod config;
pub mod connection;
pub mod consent;
pub mod controls;
pub mod counter;
pub mod draft;
pub mod effects;
pub mod faq;
pub mod filters;
pub mod i18n;
pub mod navigation;
pub mod quick_tools;
pub mod settings;
pub mod shortcuts;
pub mod storage;
pub mod store;
pub mod surface;
pub mod text_scale;
pub mod theme;
pub mod validation;

// Re-export commonly used types
pub use announce::{Announcer, Politeness, RecordingAnnouncer, Silent};
pub use availability::{Availability, StatusView, status_at, status_for};
pub use captcha::{Captcha, Operator};
pub use config::{ConfigError, SiteConfig};
pub use connection::ConnectionHint;
pub use consent::{ConsentDecision, CookieConsent};
pub use controls::{ControlSnapshot, SliderControl, write_controls};
pub use counter::{CounterLevel, CounterState};
pub use draft::{ContactDraft, DraftError};
pub use effects::{Effects, PresentationFlag, StyleVar, compute_effects};
pub use faq::{BulkAction, FaqToggle};
pub use filters::FilterSet;
pub use quick_tools::{ContrastMode, ReadAloud, ReadingEnd};
pub use settings::{AccessibilitySettings, SettingsError};
pub use shortcuts::{Shortcut, ShortcutTarget, match_shortcut};
pub use storage::{KeyValueStore, MemoryStore, keys};
pub use store::{AccessibilitySettingsStore, RestoreOutcome};
pub use surface::{ControlState, DocumentSurface, MemorySurface, PresentationState};
pub use text_scale::{ScaleChange, TextScale};
pub use theme::Theme;
pub use validation::{FieldAttrs, FieldValidity, validation_message};
