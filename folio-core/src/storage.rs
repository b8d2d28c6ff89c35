//! String-keyed persistence port and an in-memory implementation.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Keys the site writes to local storage.
pub mod keys {
    pub const A11Y_SETTINGS: &str = "a11ySettings";
    pub const THEME: &str = "theme";
    pub const CONTACT_DRAFT: &str = "contactFormDraft";
    pub const CONTRAST_WARNING_SHOWN: &str = "contrast-warning-shown";
    pub const COOKIES_ACCEPTED: &str = "cookiesAccepted";
    pub const COOKIES_FUNCTIONAL: &str = "cookiesFunctional";
    pub const COOKIES_ANALYTICS: &str = "cookiesAnalytics";
    pub const COOKIES_MARKETING: &str = "cookiesMarketing";
}

/// Trait for abstracting key/value persistence.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be stored.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        (**self).delete(key)
    }
}

/// Shared in-memory store. Clones observe the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrips_and_deletes() {
        let store = MemoryStore::new();
        assert!(store.get("theme").unwrap().is_none());
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.delete("theme").unwrap();
        store.delete("theme").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new().with_entry(keys::THEME, "light");
        let shared = Rc::new(store.clone());
        shared.set(keys::CONTACT_DRAFT, "{}").unwrap();
        assert!(store.contains(keys::CONTACT_DRAFT));
        assert_eq!(store.len(), 2);
    }
}
