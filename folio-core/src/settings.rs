//! Accessibility preferences record and its persisted JSON shape.
//!
//! The record is written under [`crate::storage::keys::A11Y_SETTINGS`] with the
//! field names older pages of the site already used (`fontSize`,
//! `letterSpacing`, `focusThickness`, ...). Numbers are written as JSON
//! numbers; numeric strings are accepted on read because earlier pages stored
//! raw slider values.

use serde::{Deserialize, Serialize};

pub const FONT_SIZE_MIN: u16 = 80;
pub const FONT_SIZE_MAX: u16 = 200;
pub const FONT_SIZE_DEFAULT: u16 = 100;
pub const LINE_HEIGHT_DEFAULT: f64 = 1.6;
pub const LETTER_SPACING_DEFAULT: f64 = 0.0;
pub const FOCUS_THICKNESS_DEFAULT: f64 = 3.0;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// User-selected accessibility preferences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    #[serde(rename = "fontSize", deserialize_with = "lenient::percent")]
    pub font_size_percent: u16,
    #[serde(deserialize_with = "lenient::decimal")]
    pub line_height: f64,
    #[serde(rename = "letterSpacing", deserialize_with = "lenient::decimal")]
    pub letter_spacing_px: f64,
    #[serde(rename = "focusThickness", deserialize_with = "lenient::decimal")]
    pub focus_outline_thickness_px: f64,
    pub high_contrast: bool,
    pub invert_colors: bool,
    pub grayscale: bool,
    pub reduce_motion: bool,
    pub disable_animations: bool,
    pub highlight_focus: bool,
    pub outline_links: bool,
    /// Only records confirmed through the settings panel take effect on load.
    pub applied: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size_percent: FONT_SIZE_DEFAULT,
            line_height: LINE_HEIGHT_DEFAULT,
            letter_spacing_px: LETTER_SPACING_DEFAULT,
            focus_outline_thickness_px: FOCUS_THICKNESS_DEFAULT,
            high_contrast: false,
            invert_colors: false,
            grayscale: false,
            reduce_motion: false,
            disable_animations: false,
            highlight_focus: true,
            outline_links: true,
            applied: false,
        }
    }
}

impl AccessibilitySettings {
    #[must_use]
    pub const fn with_applied(mut self, applied: bool) -> Self {
        self.applied = applied;
        self
    }

    /// Pull every field back into its documented range.
    ///
    /// Non-finite or non-positive decimals fall back to their defaults rather
    /// than to the nearest bound, matching what an empty slider reports.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.font_size_percent = self.font_size_percent.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            self.line_height = LINE_HEIGHT_DEFAULT;
        }
        if !self.letter_spacing_px.is_finite() || self.letter_spacing_px < 0.0 {
            self.letter_spacing_px = LETTER_SPACING_DEFAULT;
        }
        if !self.focus_outline_thickness_px.is_finite() || self.focus_outline_thickness_px <= 0.0 {
            self.focus_outline_thickness_px = FOCUS_THICKNESS_DEFAULT;
        }
        self
    }

    /// Check the numeric bounds without altering anything.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::OutOfRange`] naming the first field outside its range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(FONT_SIZE_MIN..=FONT_SIZE_MAX).contains(&self.font_size_percent) {
            return Err(SettingsError::OutOfRange {
                field: "fontSize",
                value: f64::from(self.font_size_percent),
            });
        }
        if !self.line_height.is_finite() || self.line_height <= 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "lineHeight",
                value: self.line_height,
            });
        }
        if !self.letter_spacing_px.is_finite() || self.letter_spacing_px < 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "letterSpacing",
                value: self.letter_spacing_px,
            });
        }
        if !self.focus_outline_thickness_px.is_finite() || self.focus_outline_thickness_px <= 0.0 {
            return Err(SettingsError::OutOfRange {
                field: "focusThickness",
                value: self.focus_outline_thickness_px,
            });
        }
        Ok(())
    }

    /// Parse a persisted record. Anything short of a complete, in-range
    /// record is an error so callers never apply half a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field is missing, or a
    /// number is out of range.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to the persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Number(f64),
        Text(String),
    }

    pub(super) fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Numeric::deserialize(deserializer)? {
            Numeric::Number(n) => Ok(n),
            Numeric::Text(text) => text.trim().parse::<f64>().map_err(D::Error::custom),
        }
    }

    pub(super) fn percent<'de, D>(deserializer: D) -> Result<u16, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = decimal(deserializer)?;
        if value.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&value) {
            return Err(D::Error::custom(format!(
                "expected a whole percentage, got {value}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Ok(value as u16)
    }
}
