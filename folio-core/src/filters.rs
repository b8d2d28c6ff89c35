//! Project card filters.

use std::collections::BTreeSet;

pub const ALL: &str = "all";

/// Pressed filter buttons. `all` excludes every other filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: BTreeSet<String>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_pressed<'a>(pressed: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            active: pressed.into_iter().map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn is_active(&self, filter: &str) -> bool {
        self.active.contains(filter)
    }

    /// Flip one filter; returns its new pressed state.
    pub fn toggle(&mut self, filter: &str) -> bool {
        if self.active.remove(filter) {
            return false;
        }
        if filter == ALL {
            self.active.clear();
        } else {
            self.active.remove(ALL);
        }
        self.active.insert(filter.to_string());
        true
    }

    #[must_use]
    pub fn shows_everything(&self) -> bool {
        self.active.is_empty() || self.active.contains(ALL)
    }

    /// `tags` is the card's whitespace-separated `data-tags` value.
    #[must_use]
    pub fn card_visible(&self, tags: &str) -> bool {
        self.shows_everything() || tags.split_whitespace().any(|tag| self.active.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_shows_all_cards() {
        let filters = FilterSet::new();
        assert!(filters.card_visible(""));
        assert!(filters.card_visible("rust web"));
    }

    #[test]
    fn cards_need_a_matching_tag() {
        let mut filters = FilterSet::new();
        assert!(filters.toggle("web"));
        assert!(filters.card_visible("design  web"));
        assert!(!filters.card_visible("mobile"));
        assert!(!filters.card_visible(""));
    }

    #[test]
    fn all_is_exclusive() {
        let mut filters = FilterSet::from_pressed(["web", "mobile"]);
        filters.toggle(ALL);
        assert!(filters.is_active(ALL));
        assert!(!filters.is_active("web"));
        assert!(filters.card_visible("anything"));

        filters.toggle("design");
        assert!(!filters.is_active(ALL));
        assert!(filters.is_active("design"));
    }

    #[test]
    fn toggling_twice_releases() {
        let mut filters = FilterSet::new();
        filters.toggle("web");
        assert!(!filters.toggle("web"));
        assert!(filters.shows_everything());
    }
}
