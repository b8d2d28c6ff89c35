//! Light/dark theme preference.

use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Saved choice first, then the system colour scheme.
    #[must_use]
    pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// The toggle button offers the other theme.
    #[must_use]
    pub fn toggle_text(self) -> String {
        match self {
            Self::Light => i18n::t("theme.to_dark_button"),
            Self::Dark => i18n::t("theme.to_light_button"),
        }
    }

    #[must_use]
    pub fn toggle_aria_label(self) -> String {
        match self {
            Self::Light => i18n::t("theme.to_dark_aria"),
            Self::Dark => i18n::t("theme.to_light_aria"),
        }
    }

    #[must_use]
    pub fn changed_message(self) -> String {
        match self {
            Self::Light => i18n::t("theme.changed_light"),
            Self::Dark => i18n::t("theme.changed_dark"),
        }
    }
}
