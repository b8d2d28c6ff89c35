//! Ctrl+Alt navigation shortcuts.

use crate::i18n;

/// Where a shortcut moves focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutTarget {
    /// First match of a selector.
    Selector(&'static str),
    /// First field inside the element with this id.
    FirstFieldOf(&'static str),
    Id(&'static str),
    /// Element by id, or the first match of the fallback selector.
    IdOr {
        id: &'static str,
        fallback: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub target: ShortcutTarget,
    message_key: &'static str,
}

impl Shortcut {
    #[must_use]
    pub fn message(&self) -> String {
        i18n::t(self.message_key)
    }

    /// Scrolled into view before focusing.
    #[must_use]
    pub const fn scrolls(&self) -> bool {
        !matches!(self.key, 'h' | 'm')
    }
}

pub const FIELD_SELECTOR: &str = "input, textarea, select";

pub const SHORTCUTS: [Shortcut; 6] = [
    Shortcut {
        key: 'h',
        target: ShortcutTarget::Selector("h1, h2, h3, h4, h5, h6"),
        message_key: "shortcuts.heading",
    },
    Shortcut {
        key: 'm',
        target: ShortcutTarget::Selector("main"),
        message_key: "shortcuts.main",
    },
    Shortcut {
        key: 's',
        target: ShortcutTarget::FirstFieldOf("contactForm"),
        message_key: "shortcuts.contact_form",
    },
    Shortcut {
        key: 'c',
        target: ShortcutTarget::Id("contact-info-title"),
        message_key: "shortcuts.contact_info",
    },
    Shortcut {
        key: 'f',
        target: ShortcutTarget::IdOr {
            id: "faq-title",
            fallback: "form",
        },
        message_key: "shortcuts.faq",
    },
    Shortcut {
        key: 'a',
        target: ShortcutTarget::Id("a11y-statement-title"),
        message_key: "shortcuts.statement",
    },
];

/// Announcement when `f` lands on a form because the page has no FAQ.
#[must_use]
pub fn form_fallback_message() -> String {
    i18n::t("shortcuts.form")
}

/// Shortcut bound to a key event, if any. Both Ctrl and Alt must be held.
#[must_use]
pub fn match_shortcut(key: &str, ctrl: bool, alt: bool) -> Option<&'static Shortcut> {
    if !(ctrl && alt) {
        return None;
    }
    let mut chars = key.chars();
    let ch = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    SHORTCUTS.iter().find(|shortcut| shortcut.key == ch)
}
