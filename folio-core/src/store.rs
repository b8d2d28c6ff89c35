//! Accessibility settings: apply to the page, persist, restore on load.

use crate::announce::{Announcer, Politeness};
use crate::controls::write_controls;
use crate::effects::{Effects, compute_effects};
use crate::i18n;
use crate::settings::{AccessibilitySettings, SettingsError};
use crate::storage::{KeyValueStore, keys};
use crate::surface::DocumentSurface;

/// Why [`AccessibilitySettingsStore::restore`] did or did not change the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Absent,
    Malformed,
    NotApplied,
    Restored,
}

/// Owns the persisted settings record and its effect on one document.
pub struct AccessibilitySettingsStore<S, D, A>
where
    S: KeyValueStore,
    D: DocumentSurface,
    A: Announcer,
{
    storage: S,
    surface: D,
    announcer: A,
}

impl<S, D, A> AccessibilitySettingsStore<S, D, A>
where
    S: KeyValueStore,
    D: DocumentSurface,
    A: Announcer,
{
    pub const fn new(storage: S, surface: D, announcer: A) -> Self {
        Self {
            storage,
            surface,
            announcer,
        }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn surface(&self) -> &D {
        &self.surface
    }

    pub const fn announcer(&self) -> &A {
        &self.announcer
    }

    /// Apply already-clamped settings to the page and persist them as the
    /// user's confirmed choice. A failed write is logged and otherwise
    /// ignored; the page still changes.
    pub fn apply(&self, settings: &AccessibilitySettings) {
        compute_effects(settings).apply_to(&self.surface);
        self.persist(&settings.with_applied(true));
        self.announcer
            .announce(&i18n::t("a11y.settings.applied"), Politeness::Polite);
    }

    /// Drop every override, put the panel back to its defaults and forget
    /// the persisted record.
    pub fn reset(&self) {
        Effects::cleared().apply_to(&self.surface);
        write_controls(&self.surface, &AccessibilitySettings::default());
        if let Err(err) = self.storage.delete(keys::A11Y_SETTINGS) {
            log::warn!("could not delete accessibility settings: {err}");
        }
        self.announcer
            .announce(&i18n::t("a11y.settings.reset"), Politeness::Polite);
    }

    /// Re-apply a confirmed record saved by an earlier page. Called once per
    /// page load; absent, malformed and unconfirmed records leave the page
    /// untouched and stay silent.
    pub fn restore(&self) -> RestoreOutcome {
        let settings = match self.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => return RestoreOutcome::Absent,
            Err(err) => {
                log::warn!("ignoring stored accessibility settings: {err}");
                return RestoreOutcome::Malformed;
            }
        };
        if !settings.applied {
            log::debug!("stored accessibility settings were never applied");
            return RestoreOutcome::NotApplied;
        }

        compute_effects(&settings).apply_to(&self.surface);
        let synced = write_controls(&self.surface, &settings);
        log::debug!("restored accessibility settings, {synced} controls synced");
        self.announcer
            .announce(&i18n::t("a11y.settings.restored"), Politeness::Polite);
        RestoreOutcome::Restored
    }

    /// Read the persisted record. An unreadable store counts as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a record exists but is not a complete, in-range
    /// settings record.
    pub fn load(&self) -> Result<Option<AccessibilitySettings>, SettingsError> {
        let raw = match self.storage.get(keys::A11Y_SETTINGS) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("could not read accessibility settings: {err}");
                None
            }
        };
        raw.as_deref()
            .map(AccessibilitySettings::from_json)
            .transpose()
    }

    fn persist(&self, record: &AccessibilitySettings) {
        let json = match record.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not encode accessibility settings: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(keys::A11Y_SETTINGS, &json) {
            log::warn!("could not persist accessibility settings: {err}");
        }
    }
}
