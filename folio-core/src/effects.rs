//! Mapping from a settings record to document-level presentation state.
//!
//! [`compute_effects`] is pure; [`Effects::apply_to`] is the only place that
//! touches a [`DocumentSurface`].

use smallvec::SmallVec;

use crate::settings::AccessibilitySettings;
use crate::surface::DocumentSurface;

/// Custom properties set on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleVar {
    FontSizeMultiplier,
    LineHeight,
    LetterSpacing,
    FocusThickness,
}

impl StyleVar {
    pub const ALL: [Self; 4] = [
        Self::FontSizeMultiplier,
        Self::LineHeight,
        Self::LetterSpacing,
        Self::FocusThickness,
    ];

    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::FontSizeMultiplier => "--font-size-multiplier",
            Self::LineHeight => "--line-height",
            Self::LetterSpacing => "--letter-spacing",
            Self::FocusThickness => "--focus-thickness",
        }
    }

    fn value_for(self, settings: &AccessibilitySettings) -> String {
        match self {
            Self::FontSizeMultiplier => {
                format_decimal(f64::from(settings.font_size_percent) / 100.0)
            }
            Self::LineHeight => format_decimal(settings.line_height),
            Self::LetterSpacing => format!("{}px", format_decimal(settings.letter_spacing_px)),
            Self::FocusThickness => {
                format!("{}px", format_decimal(settings.focus_outline_thickness_px))
            }
        }
    }
}

/// Body classes toggled one-to-one with the boolean settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresentationFlag {
    HighContrast,
    InvertColors,
    Grayscale,
    ReduceMotion,
    DisableAnimations,
    HighlightFocus,
    OutlineLinks,
}

impl PresentationFlag {
    pub const ALL: [Self; 7] = [
        Self::HighContrast,
        Self::InvertColors,
        Self::Grayscale,
        Self::ReduceMotion,
        Self::DisableAnimations,
        Self::HighlightFocus,
        Self::OutlineLinks,
    ];

    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::HighContrast => "high-contrast",
            Self::InvertColors => "invert-colors",
            Self::Grayscale => "grayscale",
            Self::ReduceMotion => "reduce-motion",
            Self::DisableAnimations => "no-animations",
            Self::HighlightFocus => "highlight-focus",
            Self::OutlineLinks => "outline-links",
        }
    }

    /// Id of the checkbox in the settings panel that edits this flag.
    #[must_use]
    pub const fn checkbox_id(self) -> &'static str {
        match self {
            Self::HighContrast => "high-contrast-setting",
            Self::InvertColors => "invert-colors-setting",
            Self::Grayscale => "grayscale-setting",
            Self::ReduceMotion => "reduce-motion-setting",
            Self::DisableAnimations => "disable-animations-setting",
            Self::HighlightFocus => "highlight-focus-setting",
            Self::OutlineLinks => "outline-links-setting",
        }
    }

    #[must_use]
    pub const fn enabled_in(self, settings: &AccessibilitySettings) -> bool {
        match self {
            Self::HighContrast => settings.high_contrast,
            Self::InvertColors => settings.invert_colors,
            Self::Grayscale => settings.grayscale,
            Self::ReduceMotion => settings.reduce_motion,
            Self::DisableAnimations => settings.disable_animations,
            Self::HighlightFocus => settings.highlight_focus,
            Self::OutlineLinks => settings.outline_links,
        }
    }

    pub const fn set_in(self, settings: &mut AccessibilitySettings, enabled: bool) {
        match self {
            Self::HighContrast => settings.high_contrast = enabled,
            Self::InvertColors => settings.invert_colors = enabled,
            Self::Grayscale => settings.grayscale = enabled,
            Self::ReduceMotion => settings.reduce_motion = enabled,
            Self::DisableAnimations => settings.disable_animations = enabled,
            Self::HighlightFocus => settings.highlight_focus = enabled,
            Self::OutlineLinks => settings.outline_links = enabled,
        }
    }
}

/// Presentation state derived from a settings record.
///
/// A `None` style value means "remove the override" so the stylesheet
/// default takes over again.
#[derive(Debug, Clone, PartialEq)]
pub struct Effects {
    pub style_vars: SmallVec<[(StyleVar, Option<String>); 4]>,
    pub flags: SmallVec<[(PresentationFlag, bool); 7]>,
}

impl Effects {
    /// Effects that undo everything [`compute_effects`] can set.
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            style_vars: StyleVar::ALL.iter().map(|var| (*var, None)).collect(),
            flags: PresentationFlag::ALL.iter().map(|flag| (*flag, false)).collect(),
        }
    }

    #[must_use]
    pub fn style_var(&self, var: StyleVar) -> Option<&str> {
        self.style_vars
            .iter()
            .find(|(candidate, _)| *candidate == var)
            .and_then(|(_, value)| value.as_deref())
    }

    #[must_use]
    pub fn flag(&self, flag: PresentationFlag) -> bool {
        self.flags
            .iter()
            .any(|(candidate, enabled)| *candidate == flag && *enabled)
    }

    pub fn apply_to<D: DocumentSurface + ?Sized>(&self, surface: &D) {
        for (var, value) in &self.style_vars {
            match value {
                Some(value) => surface.set_style_var(var.property(), value),
                None => surface.remove_style_var(var.property()),
            }
        }
        for (flag, enabled) in &self.flags {
            surface.set_flag(flag.class_name(), *enabled);
        }
    }
}

#[must_use]
pub fn compute_effects(settings: &AccessibilitySettings) -> Effects {
    Effects {
        style_vars: StyleVar::ALL
            .iter()
            .map(|var| (*var, Some(var.value_for(settings))))
            .collect(),
        flags: PresentationFlag::ALL
            .iter()
            .map(|flag| (*flag, flag.enabled_in(settings)))
            .collect(),
    }
}

/// Shortest decimal form: `1.5`, `1.6`, `2` (never `2.0`).
#[must_use]
pub fn format_decimal(value: f64) -> String {
    format!("{value}")
}
