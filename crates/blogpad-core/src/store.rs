// ABOUTME: Persistence contract for the post collection: a named key-value slot holding one JSON blob.
// ABOUTME: PostStore loads and overwrites the whole collection; MemorySlot backs it in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::model::Post;

/// Well-known key the post collection is stored under.
pub const POSTS_KEY: &str = "blogPosts";

/// Errors that can occur while reading or writing a slot.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid slot key: {0}")]
    InvalidKey(String),
}

/// A durable string-valued key-value slot.
pub trait Slot: Send {
    /// Read the value under `key`, or None if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// An in-process slot. Clones share the same entries, so a test can keep a
/// handle while the application owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slot for MemorySlot {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the full post collection as a single blob.
pub struct PostStore {
    slot: Box<dyn Slot>,
    key: String,
}

impl PostStore {
    /// Store posts under the default `blogPosts` key.
    pub fn new(slot: impl Slot + 'static) -> Self {
        Self::with_key(slot, POSTS_KEY)
    }

    pub fn with_key(slot: impl Slot + 'static, key: impl Into<String>) -> Self {
        Self {
            slot: Box::new(slot),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the slot holds any blob at all. An empty collection that was
    /// saved counts as initialized.
    pub fn is_initialized(&self) -> bool {
        matches!(self.slot.get(&self.key), Ok(Some(_)))
    }

    /// Load the collection. A missing, unreadable, or malformed blob yields
    /// an empty collection.
    pub fn load(&self) -> Vec<Post> {
        let blob = match self.slot.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, "failed to read post collection: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Post>>(&blob) {
            Ok(posts) => {
                tracing::debug!(key = %self.key, count = posts.len(), "loaded posts");
                posts
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "stored post collection is malformed: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize the whole collection and overwrite the slot with it.
    pub fn save(&mut self, posts: &[Post]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(posts)?;
        self.slot.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = posts.len(), "saved posts");
        Ok(())
    }
}

impl std::fmt::Debug for PostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Comment;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                id: "1".to_string(),
                title: "First".to_string(),
                author: "Ada".to_string(),
                excerpt: "Short".to_string(),
                content: "Long <b>body</b>".to_string(),
                date: "2024-01-01".to_string(),
                comments: vec![Comment {
                    id: "c1".to_string(),
                    author: "Bob".to_string(),
                    text: "Hi".to_string(),
                    date: "2024-01-02".to_string(),
                }],
            },
            Post {
                id: "2".to_string(),
                title: "Second".to_string(),
                author: "Cy".to_string(),
                excerpt: "More".to_string(),
                content: "Text".to_string(),
                date: "2024-02-01".to_string(),
                comments: vec![],
            },
        ]
    }

    #[test]
    fn load_missing_blob_is_empty() {
        let store = PostStore::new(MemorySlot::new());
        assert!(!store.is_initialized());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = PostStore::new(MemorySlot::new());
        store.save(&sample_posts()).unwrap();

        assert!(store.is_initialized());
        assert_eq!(store.load(), sample_posts());
    }

    #[test]
    fn save_of_load_is_byte_identical() {
        let slot = MemorySlot::new();
        let mut store = PostStore::new(slot.clone());
        store.save(&sample_posts()).unwrap();
        let before = slot.get(POSTS_KEY).unwrap().unwrap();

        let loaded = store.load();
        store.save(&loaded).unwrap();
        let after = slot.get(POSTS_KEY).unwrap().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn malformed_blob_loads_empty() {
        let mut slot = MemorySlot::new();
        slot.set(POSTS_KEY, "{not json").unwrap();
        let store = PostStore::new(slot);

        assert!(store.is_initialized());
        assert!(store.load().is_empty());
    }

    #[test]
    fn legacy_records_gain_empty_comments() {
        let mut slot = MemorySlot::new();
        slot.set(
            POSTS_KEY,
            r#"[{"id":"old","title":"T","author":"A","excerpt":"E","content":"C","date":"2020-01-01"}]"#,
        )
        .unwrap();
        let store = PostStore::new(slot);

        let posts = store.load();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].comments.is_empty());
    }

    #[test]
    fn save_overwrites_entire_collection() {
        let slot = MemorySlot::new();
        let mut store = PostStore::new(slot.clone());
        store.save(&sample_posts()).unwrap();
        store.save(&sample_posts()[1..]).unwrap();

        let posts = store.load();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "2");
    }

    #[test]
    fn custom_key_is_isolated() {
        let slot = MemorySlot::new();
        let mut drafts = PostStore::with_key(slot.clone(), "drafts");
        drafts.save(&sample_posts()).unwrap();

        let default = PostStore::new(slot);
        assert!(!default.is_initialized());
        assert_eq!(drafts.key(), "drafts");
    }
}
