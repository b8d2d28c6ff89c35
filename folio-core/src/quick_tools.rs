//! Labels and announcements of the high-contrast and read-aloud buttons.

use crate::i18n;

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
/// Voice language used when reading the page aloud.
pub const SPEECH_LANG: &str = "ru-RU";

/// High-contrast quick toggle. Independent of the persisted settings flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContrastMode {
    pub enabled: bool,
}

impl ContrastMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
        }
    }

    #[must_use]
    pub fn button_text(self) -> String {
        i18n::t(if self.enabled {
            "contrast_mode.button_enabled"
        } else {
            "contrast_mode.button_disabled"
        })
    }

    #[must_use]
    pub fn aria_label(self) -> String {
        i18n::t(if self.enabled {
            "contrast_mode.aria_enabled"
        } else {
            "contrast_mode.aria_disabled"
        })
    }

    #[must_use]
    pub fn announcement(self) -> String {
        i18n::t(if self.enabled {
            "contrast_mode.enabled"
        } else {
            "contrast_mode.disabled"
        })
    }
}

/// Read-aloud button state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadAloud {
    #[default]
    Idle,
    Reading,
}

/// Why reading went back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingEnd {
    Finished,
    Stopped,
}

impl ReadAloud {
    #[must_use]
    pub fn button_text(self) -> String {
        i18n::t(match self {
            Self::Idle => "read_aloud.start_button",
            Self::Reading => "read_aloud.stop_button",
        })
    }

    #[must_use]
    pub fn aria_label(self) -> String {
        i18n::t(match self {
            Self::Idle => "read_aloud.start_aria",
            Self::Reading => "read_aloud.stop_aria",
        })
    }

    #[must_use]
    pub fn started_message() -> String {
        i18n::t("read_aloud.started")
    }

    #[must_use]
    pub fn end_message(end: ReadingEnd) -> String {
        i18n::t(match end {
            ReadingEnd::Finished => "read_aloud.finished",
            ReadingEnd::Stopped => "read_aloud.stopped",
        })
    }

    #[must_use]
    pub fn unsupported_message() -> String {
        i18n::t("read_aloud.unsupported")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_mode_relabels_with_state() {
        let on = ContrastMode::default().toggled();
        assert!(on.enabled);
        assert_eq!(on.button_text(), "🎨 Обычная контрастность");
        assert_eq!(on.aria_label(), "Отключить режим высокой контрастности");
        assert_eq!(on.announcement(), "Высокая контрастность включена");

        let off = on.toggled();
        assert_eq!(off.button_text(), "🎨 Высокая контрастность");
        assert_eq!(off.announcement(), "Высокая контрастность выключена");
    }

    #[test]
    fn read_aloud_labels() {
        assert_eq!(ReadAloud::Idle.button_text(), "🔊 Читать вслух");
        assert_eq!(ReadAloud::Reading.aria_label(), "Остановить чтение вслух");
        assert_eq!(
            ReadAloud::end_message(ReadingEnd::Stopped),
            "Чтение текста остановлено"
        );
        assert_eq!(
            ReadAloud::end_message(ReadingEnd::Finished),
            "Чтение текста завершено"
        );
    }
}
