//! Saved contact-form draft.

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactDraft {
    /// Ids of the form fields, paired with the draft field they fill.
    pub const FIELD_IDS: [&'static str; 4] =
        ["contactName", "contactEmail", "contactSubject", "contactMessage"];

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&str> {
        match id {
            "contactName" => Some(&self.name),
            "contactEmail" => Some(&self.email),
            "contactSubject" => Some(&self.subject),
            "contactMessage" => Some(&self.message),
            _ => None,
        }
    }

    pub fn set_field(&mut self, id: &str, value: impl Into<String>) {
        let slot = match id {
            "contactName" => &mut self.name,
            "contactEmail" => &mut self.email,
            "contactSubject" => &mut self.subject,
            "contactMessage" => &mut self.message,
            _ => return,
        };
        *slot = value.into();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError<E: std::error::Error + 'static> {
    #[error("draft storage failed: {0}")]
    Storage(#[source] E),
    #[error("draft is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// # Errors
///
/// Returns an error if the draft cannot be encoded or written.
pub fn save_draft<S: KeyValueStore>(
    storage: &S,
    draft: &ContactDraft,
) -> Result<(), DraftError<S::Error>> {
    let json = serde_json::to_string(draft)?;
    storage
        .set(keys::CONTACT_DRAFT, &json)
        .map_err(DraftError::Storage)
}

/// # Errors
///
/// Returns an error if storage cannot be read or the stored draft is
/// malformed.
pub fn load_draft<S: KeyValueStore>(
    storage: &S,
) -> Result<Option<ContactDraft>, DraftError<S::Error>> {
    let Some(raw) = storage
        .get(keys::CONTACT_DRAFT)
        .map_err(DraftError::Storage)?
    else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// # Errors
///
/// Returns an error if the key cannot be removed.
pub fn discard_draft<S: KeyValueStore>(storage: &S) -> Result<(), S::Error> {
    storage.delete(keys::CONTACT_DRAFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn save_then_load() {
        let storage = MemoryStore::new();
        let mut draft = ContactDraft::default();
        draft.set_field("contactName", "Анна");
        draft.set_field("contactMessage", "Здравствуйте!");
        draft.set_field("unknown", "ignored");
        save_draft(&storage, &draft).unwrap();

        let loaded = load_draft(&storage).unwrap().unwrap();
        assert_eq!(loaded, draft);
        assert_eq!(loaded.field("contactName"), Some("Анна"));
        assert_eq!(loaded.field("contactEmail"), Some(""));
    }

    #[test]
    fn partial_drafts_fill_missing_fields() {
        let storage = MemoryStore::new().with_entry(keys::CONTACT_DRAFT, r#"{"email":"a@b.ru"}"#);
        let loaded = load_draft(&storage).unwrap().unwrap();
        assert_eq!(loaded.email, "a@b.ru");
        assert_eq!(loaded.name, "");
    }

    #[test]
    fn malformed_draft_is_an_error() {
        let storage = MemoryStore::new().with_entry(keys::CONTACT_DRAFT, "[1,2");
        assert!(matches!(load_draft(&storage), Err(DraftError::Json(_))));
    }

    #[test]
    fn discard_removes_key() {
        let storage = MemoryStore::new().with_entry(keys::CONTACT_DRAFT, "{}");
        discard_draft(&storage).unwrap();
        assert!(load_draft(&storage).unwrap().is_none());
    }
}
