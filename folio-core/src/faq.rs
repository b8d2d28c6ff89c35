//! FAQ accordion state transitions.

use crate::i18n;

pub const ICON_COLLAPSED: &str = "➕";
pub const ICON_EXPANDED: &str = "➖";

/// What a toggle click does to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqToggle {
    pub expanded: bool,
}

impl FaqToggle {
    /// Anything other than `"true"` reads as collapsed.
    #[must_use]
    pub fn from_attr(aria_expanded: Option<&str>) -> Self {
        Self {
            expanded: aria_expanded == Some("true"),
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            expanded: !self.expanded,
        }
    }

    #[must_use]
    pub const fn aria_value(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    #[must_use]
    pub const fn answer_hidden(self) -> bool {
        !self.expanded
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        if self.expanded {
            ICON_EXPANDED
        } else {
            ICON_COLLAPSED
        }
    }

    #[must_use]
    pub fn announcement(self) -> String {
        if self.expanded {
            i18n::t("faq.opened")
        } else {
            i18n::t("faq.closed")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ExpandAll,
    CollapseAll,
}

impl BulkAction {
    /// Only toggles whose state is explicitly the opposite are clicked;
    /// a missing `aria-expanded` is left alone.
    #[must_use]
    pub fn should_toggle(self, aria_expanded: Option<&str>) -> bool {
        match self {
            Self::ExpandAll => aria_expanded == Some("false"),
            Self::CollapseAll => aria_expanded == Some("true"),
        }
    }

    #[must_use]
    pub fn announcement(self) -> String {
        match self {
            Self::ExpandAll => i18n::t("faq.all_expanded"),
            Self::CollapseAll => i18n::t("faq.all_collapsed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state_and_icon() {
        i18n::set_lang("ru");
        let opened = FaqToggle::from_attr(Some("false")).toggled();
        assert!(opened.expanded);
        assert_eq!(opened.aria_value(), "true");
        assert!(!opened.answer_hidden());
        assert_eq!(opened.icon(), "➖");
        assert_eq!(opened.announcement(), "Ответ открыт");

        let closed = opened.toggled();
        assert_eq!(closed.icon(), "➕");
        assert_eq!(closed.announcement(), "Ответ скрыт");
    }

    #[test]
    fn missing_attribute_reads_collapsed() {
        assert!(!FaqToggle::from_attr(None).expanded);
    }

    #[test]
    fn bulk_actions_skip_unknown_state() {
        assert!(BulkAction::ExpandAll.should_toggle(Some("false")));
        assert!(!BulkAction::ExpandAll.should_toggle(Some("true")));
        assert!(!BulkAction::ExpandAll.should_toggle(None));
        assert!(BulkAction::CollapseAll.should_toggle(Some("true")));
        assert!(!BulkAction::CollapseAll.should_toggle(None));
    }
}
