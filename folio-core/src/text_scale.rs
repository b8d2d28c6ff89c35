//! Quick text-size buttons.

use crate::i18n;
use crate::settings::{FONT_SIZE_DEFAULT, FONT_SIZE_MAX, FONT_SIZE_MIN};

pub const STEP: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleChange {
    Increased(u16),
    Decreased(u16),
    AtMaximum,
    AtMinimum,
}

impl ScaleChange {
    #[must_use]
    pub fn announcement(self) -> String {
        match self {
            Self::Increased(size) => {
                i18n::tr("text_scale.increased", &[("size", &size.to_string())])
            }
            Self::Decreased(size) => {
                i18n::tr("text_scale.decreased", &[("size", &size.to_string())])
            }
            Self::AtMaximum => i18n::t("text_scale.max"),
            Self::AtMinimum => i18n::t("text_scale.min"),
        }
    }
}

/// Root font size in percent, adjusted in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextScale {
    percent: u16,
}

impl Default for TextScale {
    fn default() -> Self {
        Self {
            percent: FONT_SIZE_DEFAULT,
        }
    }
}

impl TextScale {
    #[must_use]
    pub const fn percent(self) -> u16 {
        self.percent
    }

    /// Value for the root element's `font-size`.
    #[must_use]
    pub fn css_value(self) -> String {
        format!("{}%", self.percent)
    }

    pub fn increase(&mut self) -> ScaleChange {
        if self.percent >= FONT_SIZE_MAX {
            return ScaleChange::AtMaximum;
        }
        self.percent = (self.percent + STEP).min(FONT_SIZE_MAX);
        ScaleChange::Increased(self.percent)
    }

    pub fn decrease(&mut self) -> ScaleChange {
        if self.percent <= FONT_SIZE_MIN {
            return ScaleChange::AtMinimum;
        }
        self.percent = self.percent.saturating_sub(STEP).max(FONT_SIZE_MIN);
        ScaleChange::Decreased(self.percent)
    }
}
