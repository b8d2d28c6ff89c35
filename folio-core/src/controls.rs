//! Settings panel controls: ids, read-outs, and conversion to and from a
//! settings record.

use std::collections::BTreeMap;

use crate::effects::{PresentationFlag, format_decimal};
use crate::settings::AccessibilitySettings;
use crate::surface::DocumentSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SliderControl {
    FontSize,
    LineHeight,
    LetterSpacing,
    FocusThickness,
}

impl SliderControl {
    pub const ALL: [Self; 4] = [
        Self::FontSize,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::FocusThickness,
    ];

    #[must_use]
    pub const fn input_id(self) -> &'static str {
        match self {
            Self::FontSize => "font-size-setting",
            Self::LineHeight => "line-height-setting",
            Self::LetterSpacing => "letter-spacing-setting",
            Self::FocusThickness => "focus-thickness-setting",
        }
    }

    /// Id of the element that echoes the slider value next to it.
    #[must_use]
    pub const fn output_id(self) -> &'static str {
        match self {
            Self::FontSize => "font-size-value",
            Self::LineHeight => "line-height-value",
            Self::LetterSpacing => "letter-spacing-value",
            Self::FocusThickness => "focus-thickness-value",
        }
    }

    #[must_use]
    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slider| slider.input_id() == id)
    }

    /// Raw value written into the slider.
    #[must_use]
    pub fn value(self, settings: &AccessibilitySettings) -> String {
        match self {
            Self::FontSize => settings.font_size_percent.to_string(),
            Self::LineHeight => format_decimal(settings.line_height),
            Self::LetterSpacing => format_decimal(settings.letter_spacing_px),
            Self::FocusThickness => format_decimal(settings.focus_outline_thickness_px),
        }
    }

    /// Human-readable read-out, with its unit.
    #[must_use]
    pub fn display(self, settings: &AccessibilitySettings) -> String {
        self.display_raw(&self.value(settings))
    }

    /// Read-out for a raw slider value while the user drags it.
    #[must_use]
    pub fn display_raw(self, raw: &str) -> String {
        match self {
            Self::FontSize => format!("{raw}%"),
            Self::LineHeight => raw.to_string(),
            Self::LetterSpacing | Self::FocusThickness => format!("{raw}px"),
        }
    }
}

/// Values read from whichever settings controls a page carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub sliders: BTreeMap<SliderControl, String>,
    pub checkboxes: BTreeMap<PresentationFlag, bool>,
}

impl ControlSnapshot {
    #[must_use]
    pub fn with_slider(mut self, slider: SliderControl, raw: impl Into<String>) -> Self {
        self.sliders.insert(slider, raw.into());
        self
    }

    #[must_use]
    pub fn with_checkbox(mut self, flag: PresentationFlag, checked: bool) -> Self {
        self.checkboxes.insert(flag, checked);
        self
    }

    fn decimal(&self, slider: SliderControl) -> Option<f64> {
        self.sliders
            .get(&slider)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
    }

    /// Build a clamped settings record. Missing or unreadable controls keep
    /// their documented defaults.
    #[must_use]
    pub fn to_settings(&self) -> AccessibilitySettings {
        let mut settings = AccessibilitySettings::default();
        if let Some(percent) = self.decimal(SliderControl::FontSize) {
            settings.font_size_percent = percent_from_decimal(percent);
        }
        if let Some(value) = self.decimal(SliderControl::LineHeight) {
            settings.line_height = value;
        }
        if let Some(value) = self.decimal(SliderControl::LetterSpacing) {
            settings.letter_spacing_px = value;
        }
        if let Some(value) = self.decimal(SliderControl::FocusThickness) {
            settings.focus_outline_thickness_px = value;
        }
        for (flag, checked) in &self.checkboxes {
            flag.set_in(&mut settings, *checked);
        }
        settings.clamped()
    }
}

fn percent_from_decimal(value: f64) -> u16 {
    if !value.is_finite() {
        return crate::settings::FONT_SIZE_DEFAULT;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = value.round().clamp(0.0, f64::from(u16::MAX)) as u16;
    percent
}

/// Write every field of `settings` into the controls present on the page.
///
/// Returns how many controls were found.
pub fn write_controls<D: DocumentSurface + ?Sized>(
    surface: &D,
    settings: &AccessibilitySettings,
) -> usize {
    let mut found = 0;
    for slider in SliderControl::ALL {
        found += usize::from(surface.set_control_value(slider.input_id(), &slider.value(settings)));
        found += usize::from(surface.set_control_text(slider.output_id(), &slider.display(settings)));
    }
    for flag in PresentationFlag::ALL {
        found += usize::from(surface.set_control_checked(flag.checkbox_id(), flag.enabled_in(settings)));
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ControlState, MemorySurface};

    #[test]
    fn display_adds_units() {
        let settings = AccessibilitySettings {
            font_size_percent: 130,
            letter_spacing_px: 1.5,
            ..AccessibilitySettings::default()
        };
        assert_eq!(SliderControl::FontSize.display(&settings), "130%");
        assert_eq!(SliderControl::LineHeight.display(&settings), "1.6");
        assert_eq!(SliderControl::LetterSpacing.display(&settings), "1.5px");
        assert_eq!(SliderControl::FocusThickness.display(&settings), "3px");
    }

    #[test]
    fn snapshot_reads_and_clamps() {
        let snapshot = ControlSnapshot::default()
            .with_slider(SliderControl::FontSize, "260")
            .with_slider(SliderControl::LineHeight, "2.2")
            .with_slider(SliderControl::LetterSpacing, "oops")
            .with_checkbox(PresentationFlag::Grayscale, true)
            .with_checkbox(PresentationFlag::OutlineLinks, false);
        let settings = snapshot.to_settings();
        assert_eq!(settings.font_size_percent, 200);
        assert!((settings.line_height - 2.2).abs() < f64::EPSILON);
        assert!(settings.letter_spacing_px.abs() < f64::EPSILON);
        assert!(settings.grayscale);
        assert!(!settings.outline_links);
        assert!(settings.highlight_focus);
        assert!(!settings.applied);
    }

    #[test]
    fn empty_snapshot_yields_defaults() {
        assert_eq!(
            ControlSnapshot::default().to_settings(),
            AccessibilitySettings::default()
        );
    }

    #[test]
    fn slider_lookup_by_input_id() {
        assert_eq!(
            SliderControl::from_input_id("letter-spacing-setting"),
            Some(SliderControl::LetterSpacing)
        );
        assert_eq!(SliderControl::from_input_id("font-size-value"), None);
    }

    #[test]
    fn write_controls_skips_absent_elements() {
        let surface = MemorySurface::with_checkboxes_only();
        let settings = AccessibilitySettings {
            invert_colors: true,
            ..AccessibilitySettings::default()
        };
        assert_eq!(write_controls(&surface, &settings), PresentationFlag::ALL.len());
        assert_eq!(
            surface.control("invert-colors-setting"),
            Some(ControlState::Checked(true))
        );
        assert!(surface.control("font-size-setting").is_none());
    }
}
