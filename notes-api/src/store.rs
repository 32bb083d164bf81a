//! Note storage.
//!
//! [`NoteStore`] is the seam between the HTTP handlers and the backing
//! map: a persistent, concurrency-safe backend can replace the bundled
//! [`MemoryStore`] without touching request handling.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A stored note. `date` is stamped on creation and refreshed on every
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Display name.
    pub name: String,
    /// Body text.
    pub content: String,
    /// Local timestamp, `%Y-%m-%d %H:%M:%S`.
    pub date: String,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    /// Replacement name, if any.
    pub name: Option<String>,
    /// Replacement content, if any.
    pub content: Option<String>,
}

/// Store operations used by the handlers.
pub trait NoteStore: Send + Sync {
    /// Snapshot of all notes keyed by id.
    fn list(&self) -> BTreeMap<u64, Note>;
    /// One note by id.
    fn get(&self, id: u64) -> Option<Note>;
    /// Create a note, stamping the creation date. Returns the new id.
    fn insert(&self, name: String, content: String) -> u64;
    /// Apply a patch and refresh the date. `None` if the id is unknown.
    fn update(&self, id: u64, patch: NotePatch) -> Option<Note>;
    /// Delete by id; `true` if a note was removed.
    fn remove(&self, id: u64) -> bool;
}

/// Process-local store; everything is lost on restart.
///
/// Ids come from a monotonic counter and are never reused within one
/// process lifetime, so deleting a note cannot alias a later one.
pub struct MemoryStore {
    notes: RwLock<BTreeMap<u64, Note>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl NoteStore for MemoryStore {
    fn list(&self) -> BTreeMap<u64, Note> {
        self.notes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn get(&self, id: u64) -> Option<Note> {
        self.notes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn insert(&self, name: String, content: String) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let note = Note {
            name,
            content,
            date: timestamp(),
        };
        self.notes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, note);
        id
    }

    fn update(&self, id: u64, patch: NotePatch) -> Option<Note> {
        let mut notes = self.notes.write().unwrap_or_else(PoisonError::into_inner);
        let note = notes.get_mut(&id)?;
        if let Some(name) = patch.name {
            note.name = name;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        note.date = timestamp();
        Some(note.clone())
    }

    fn remove(&self, id: u64) -> bool {
        self.notes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store = MemoryStore::new();
        let id = store.insert("First".to_owned(), "Body".to_owned());
        let note = store.get(id).unwrap();
        assert_eq!(note.name, "First");
        assert_eq!(note.content, "Body");
        assert!(!note.date.is_empty());
    }

    #[test]
    fn test_update_patches_and_refreshes_date() {
        let store = MemoryStore::new();
        let id = store.insert("Old".to_owned(), "Old body".to_owned());
        let patch = NotePatch {
            name: Some("New".to_owned()),
            content: None,
        };
        let note = store.update(id, patch).unwrap();
        assert_eq!(note.name, "New");
        assert_eq!(note.content, "Old body");
    }

    #[test]
    fn test_update_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.update(99, NotePatch::default()).is_none());
    }

    #[test]
    fn test_remove() {
        let store = MemoryStore::new();
        let id = store.insert("N".to_owned(), "C".to_owned());
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = MemoryStore::new();
        let first = store.insert("A".to_owned(), "a".to_owned());
        assert!(store.remove(first));
        let second = store.insert("B".to_owned(), "b".to_owned());
        assert_ne!(first, second);
    }

    #[test]
    fn test_list_snapshot() {
        let store = MemoryStore::new();
        store.insert("A".to_owned(), "a".to_owned());
        store.insert("B".to_owned(), "b".to_owned());
        assert_eq!(store.list().len(), 2);
    }
}
