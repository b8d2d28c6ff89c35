//! In-memory pages for driving the settings store without a browser.
//!
//! Every page opened from one [`PageHarness`] shares the same storage, so
//! opening a second page is the same as navigating to another page of the
//! site in the same browser profile.

use std::fmt::Debug;

use folio_core::{
    AccessibilitySettings, AccessibilitySettingsStore, MemoryStore, MemorySurface,
    RecordingAnnouncer,
};
use rand::Rng;

pub type HarnessPage = AccessibilitySettingsStore<MemoryStore, MemorySurface, RecordingAnnouncer>;

/// Which settings controls the simulated page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    SettingsPanel,
    CheckboxesOnly,
    Bare,
}

impl PageKind {
    pub const ALL: [Self; 3] = [Self::SettingsPanel, Self::CheckboxesOnly, Self::Bare];

    fn surface(self) -> MemorySurface {
        match self {
            Self::SettingsPanel => MemorySurface::with_settings_panel(),
            Self::CheckboxesOnly => MemorySurface::with_checkboxes_only(),
            Self::Bare => MemorySurface::bare(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageHarness {
    storage: MemoryStore,
}

impl PageHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(storage: MemoryStore) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &MemoryStore {
        &self.storage
    }

    /// Load a fresh document of the given kind over the shared storage.
    pub fn open(&self, kind: PageKind) -> HarnessPage {
        AccessibilitySettingsStore::new(
            self.storage.clone(),
            kind.surface(),
            RecordingAnnouncer::default(),
        )
    }
}

/// A valid preferences record on the slider grid the panel offers.
pub fn random_settings<R: Rng + ?Sized>(rng: &mut R) -> AccessibilitySettings {
    AccessibilitySettings {
        font_size_percent: rng.gen_range(8..=20) * 10,
        line_height: f64::from(rng.gen_range(10..=30_u8)) / 10.0,
        letter_spacing_px: f64::from(rng.gen_range(0..=10_u8)) / 2.0,
        focus_outline_thickness_px: f64::from(rng.gen_range(1..=10_u8)),
        high_contrast: rng.gen_bool(0.5),
        invert_colors: rng.gen_bool(0.5),
        grayscale: rng.gen_bool(0.5),
        reduce_motion: rng.gen_bool(0.5),
        disable_animations: rng.gen_bool(0.5),
        highlight_focus: rng.gen_bool(0.5),
        outline_links: rng.gen_bool(0.5),
        applied: false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: String,
        expected: String,
        actual: String,
    },
    #[error("{0}")]
    Violated(String),
}

/// # Errors
///
/// Returns [`CheckError::Mismatch`] when the values differ.
pub fn expect_eq<T: PartialEq + Debug>(
    what: impl Into<String>,
    expected: &T,
    actual: &T,
) -> Result<(), CheckError> {
    if expected == actual {
        return Ok(());
    }
    Err(CheckError::Mismatch {
        what: what.into(),
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RestoreOutcome;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn pages_share_storage() {
        let harness = PageHarness::new();
        harness
            .open(PageKind::SettingsPanel)
            .apply(&AccessibilitySettings::default());
        let next = harness.open(PageKind::Bare);
        assert_eq!(next.restore(), RestoreOutcome::Restored);
    }

    #[test]
    fn random_settings_are_always_valid() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..200 {
            random_settings(&mut rng).validate().expect("in range");
        }
    }

    #[test]
    fn expect_eq_describes_mismatch() {
        let err = expect_eq("font size", &100, &130).expect_err("values differ");
        assert_eq!(err.to_string(), "font size: expected 100, got 130");
        assert!(expect_eq("same", &"a", &"a").is_ok());
    }
}
