//! Contact availability shown by the status indicator.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::i18n;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Online,
    Limited,
    Offline,
}

impl Availability {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Limited => "limited",
            Self::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub availability: Availability,
    pub text: String,
    pub label: String,
}

impl StatusView {
    /// Full `class` attribute of the indicator.
    #[must_use]
    pub fn class_attr(&self) -> String {
        format!("status-indicator {}", self.availability.css_class())
    }
}

/// Weekdays 10:00-18:00 online, Saturday 12:00-16:00 limited, Sunday off.
#[must_use]
pub fn status_at(weekday: Weekday, hour: u32) -> StatusView {
    let (availability, text_key, label_key) = match weekday {
        Weekday::Sat if (12..16).contains(&hour) => {
            (Availability::Limited, "status.limited_text", "status.limited_label")
        }
        Weekday::Sat => (
            Availability::Offline,
            "status.offline_saturday",
            "status.offline_label",
        ),
        Weekday::Sun => (Availability::Offline, "status.day_off", "status.offline_label"),
        _ if (10..18).contains(&hour) => {
            (Availability::Online, "status.online_text", "status.online_label")
        }
        _ => (
            Availability::Offline,
            "status.offline_weekday",
            "status.offline_label",
        ),
    };
    StatusView {
        availability,
        text: i18n::t(text_key),
        label: i18n::t(label_key),
    }
}

#[must_use]
pub fn status_for(now: &NaiveDateTime) -> StatusView {
    status_at(now.weekday(), now.hour())
}

/// Day index as reported by JavaScript dates, Sunday = 0.
#[must_use]
pub fn weekday_from_sunday_index(index: u32) -> Weekday {
    match index % 7 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn weekday_hours() {
        i18n::set_lang("ru");
        let open = status_at(Weekday::Tue, 10);
        assert_eq!(open.availability, Availability::Online);
        assert_eq!(open.text, "Сейчас доступна");
        assert_eq!(open.class_attr(), "status-indicator online");

        let late = status_at(Weekday::Fri, 18);
        assert_eq!(late.availability, Availability::Offline);
        assert_eq!(late.text, "Сейчас недоступна (рабочие часы: 10:00-18:00)");
        assert_eq!(late.label, "Недоступна для связи");
    }

    #[test]
    fn weekend_hours() {
        i18n::set_lang("ru");
        assert_eq!(status_at(Weekday::Sat, 12).availability, Availability::Limited);
        assert_eq!(
            status_at(Weekday::Sat, 16).text,
            "Сейчас недоступна (суббота: 12:00-16:00)"
        );
        let sunday = status_at(Weekday::Sun, 12);
        assert_eq!(sunday.availability, Availability::Offline);
        assert_eq!(sunday.text, "Выходной");
    }

    #[test]
    fn from_datetime() {
        i18n::set_lang("ru");
        // 2024-06-03 was a Monday.
        let now = NaiveDate::from_ymd_opt(2024, 6, 3)
            .and_then(|d| d.and_hms_opt(11, 30, 0))
            .unwrap();
        assert_eq!(status_for(&now).availability, Availability::Online);
    }

    #[test]
    fn sunday_based_index() {
        assert_eq!(weekday_from_sunday_index(0), Weekday::Sun);
        assert_eq!(weekday_from_sunday_index(1), Weekday::Mon);
        assert_eq!(weekday_from_sunday_index(6), Weekday::Sat);
    }
}
