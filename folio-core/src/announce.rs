//! Screen reader announcements.

use std::cell::RefCell;
use std::rc::Rc;

/// Value of the live region's `aria-live` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Politeness {
    #[default]
    Polite,
    Assertive,
}

impl Politeness {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// Fire-and-forget message for assistive technology.
pub trait Announcer {
    fn announce(&self, message: &str, politeness: Politeness);
}

impl<T: Announcer + ?Sized> Announcer for Rc<T> {
    fn announce(&self, message: &str, politeness: Politeness) {
        (**self).announce(message, politeness);
    }
}

/// Announcer that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Announcer for Silent {
    fn announce(&self, _message: &str, _politeness: Politeness) {}
}

/// Keeps every announcement for later inspection. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    log: Rc<RefCell<Vec<(String, Politeness)>>>,
}

impl RecordingAnnouncer {
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.log.borrow().iter().map(|(msg, _)| msg.clone()).collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<(String, Politeness)> {
        self.log.borrow().last().cloned()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.log.borrow().len()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, message: &str, politeness: Politeness) {
        self.log.borrow_mut().push((message.to_string(), politeness));
    }
}
