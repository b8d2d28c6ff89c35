//! Cookie consent decisions.
//!
//! Rejecting cookies is also a privacy action: every locally persisted piece
//! of user state is purged.

use crate::storage::{KeyValueStore, keys};

const CONSENT_KEYS: [&str; 4] = [
    keys::COOKIES_ACCEPTED,
    keys::COOKIES_FUNCTIONAL,
    keys::COOKIES_ANALYTICS,
    keys::COOKIES_MARKETING,
];

/// User state removed when cookies are rejected.
pub const PURGED_ON_REJECT: [&str; 2] = [keys::A11Y_SETTINGS, keys::CONTACT_DRAFT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentDecision {
    Accepted,
    Rejected,
}

pub struct CookieConsent<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> CookieConsent<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored decision, if the visitor made one. Any stored value other
    /// than `"true"` counts as a rejection.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn decision(&self) -> Result<Option<ConsentDecision>, S::Error> {
        Ok(self
            .storage
            .get(keys::COOKIES_ACCEPTED)?
            .filter(|value| !value.is_empty())
            .map(|value| {
                if value == "true" {
                    ConsentDecision::Accepted
                } else {
                    ConsentDecision::Rejected
                }
            }))
    }

    /// Whether the banner should be shown. Unreadable storage shows it.
    #[must_use]
    pub fn needs_notice(&self) -> bool {
        match self.decision() {
            Ok(decision) => decision.is_none(),
            Err(err) => {
                log::warn!("could not read cookie decision: {err}");
                true
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if a consent flag cannot be written.
    pub fn accept(&self) -> Result<(), S::Error> {
        self.record("true")
    }

    /// Record the rejection and purge persisted user state.
    ///
    /// # Errors
    ///
    /// Returns an error if a consent flag cannot be written or a purge fails.
    pub fn reject(&self) -> Result<(), S::Error> {
        self.record("false")?;
        for key in PURGED_ON_REJECT {
            self.storage.delete(key)?;
        }
        log::debug!("cookies rejected, purged {} keys", PURGED_ON_REJECT.len());
        Ok(())
    }

    fn record(&self, value: &str) -> Result<(), S::Error> {
        for key in CONSENT_KEYS {
            self.storage.set(key, value)?;
        }
        Ok(())
    }
}
