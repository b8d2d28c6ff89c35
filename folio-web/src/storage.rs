//! `localStorage` behind the core key/value port.

use folio_core::KeyValueStore;

use crate::dom;

/// Browser local storage. Each call looks the handle up again so a page
/// that loses storage access mid-session degrades to errors, not panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WebStorage {
    fn handle() -> Result<web_sys::Storage, WebStorageError> {
        dom::local_storage().map_err(|e| WebStorageError::Unavailable(dom::js_error_message(&e)))
    }
}

impl KeyValueStore for WebStorage {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }

    fn delete(&self, key: &str) -> Result<(), Self::Error> {
        Self::handle()?
            .remove_item(key)
            .map_err(|e| WebStorageError::Storage(dom::js_error_message(&e)))
    }
}
