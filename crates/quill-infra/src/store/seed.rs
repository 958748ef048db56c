//! Seed data - initial posts loaded once at startup from a JSON document.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::memory::InMemoryPostStore;

/// Seed document: `{ "posts": [ { "id", "title", "content", "author" } ] }`.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub posts: Vec<SeedPost>,
}

/// One seed entry. Ids come straight from the document; timestamps are
/// stamped at load time.
#[derive(Debug, Deserialize)]
pub struct SeedPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SeedFile {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SeedError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl InMemoryPostStore {
    /// Read and apply a seed document. Returns the number of posts loaded.
    pub async fn load_seed_file(&self, path: impl AsRef<Path>) -> Result<usize, SeedError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let seed = SeedFile::from_slice(&bytes)?;

        let loaded = self.apply_seed(seed).await;
        tracing::info!(count = loaded, "loaded seed posts");

        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use quill_core::ports::PostStore;

    use super::*;

    const SEED_JSON: &[u8] = br#"{
        "posts": [
            { "id": 1, "title": "First", "content": "Hello", "author": "Ann" },
            { "id": 5, "title": "Fifth", "content": "World", "author": "Bob" }
        ]
    }"#;

    #[tokio::test]
    async fn apply_seed_inserts_under_document_ids() {
        let store = InMemoryPostStore::new();
        let seed = SeedFile::from_slice(SEED_JSON).unwrap();

        let loaded = store.apply_seed(seed).await;
        assert_eq!(loaded, 2);

        let first = store.get(1).await.unwrap();
        assert_eq!(first.title, "First");
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(store.get(5).await.unwrap().author, "Bob");
    }

    #[tokio::test]
    async fn counter_advances_past_seeded_ids() {
        let store = InMemoryPostStore::new();
        let seed = SeedFile::from_slice(SEED_JSON).unwrap();
        store.apply_seed(seed).await;

        let created = store
            .create(quill_core::domain::Post::new("New", "Post", "Cid"))
            .await
            .unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = SeedFile::from_slice(b"{ not json").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let store = InMemoryPostStore::new();
        let err = store
            .load_seed_file("does_not_exist.json")
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
