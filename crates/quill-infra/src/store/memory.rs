//! In-memory post store - the authoritative record keeper.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Post;
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

use super::seed::SeedFile;

/// Map plus id counter, guarded together so id assignment is atomic with
/// insertion.
struct Inner {
    posts: HashMap<u64, Post>,
    next_id: u64,
}

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Writes hold the exclusive lock; reads share it, so readers never observe
/// a half-applied mutation. Ids come from a monotonic counter and are never
/// reused, even after deletes. Note: data is lost on process restart.
pub struct InMemoryPostStore {
    inner: RwLock<Inner>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert seed entries under their document-supplied ids, stamping fresh
    /// timestamps, then advance the id counter past the highest seeded id so
    /// later creates cannot collide. Returns the number of entries loaded.
    pub async fn apply_seed(&self, seed: SeedFile) -> usize {
        let mut inner = self.inner.write().await;

        let mut loaded = 0;
        for entry in seed.posts {
            let mut post = Post::new(entry.title, entry.content, entry.author);
            post.id = entry.id;
            inner.next_id = inner.next_id.max(entry.id + 1);
            inner.posts.insert(entry.id, post);
            loaded += 1;
        }

        loaded
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn create(&self, mut post: Post) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        post.id = inner.next_id;
        inner.next_id += 1;
        inner.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn get(&self, id: u64) -> Result<Post, StoreError> {
        let inner = self.inner.read().await;
        inner.posts.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Vec<Post> {
        let inner = self.inner.read().await;
        inner.posts.values().cloned().collect()
    }

    async fn update(&self, id: u64, mut post: Post) -> Result<Post, StoreError> {
        let mut inner = self.inner.write().await;

        if !inner.posts.contains_key(&id) {
            return Err(StoreError::NotFound);
        }

        // The stored id wins over whatever the payload claims.
        post.id = id;
        inner.posts.insert(id, post.clone());

        Ok(post)
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        if inner.posts.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;

    fn sample_post() -> Post {
        Post::new("Test Post", "Test Content", "Test Author")
    }

    #[tokio::test]
    async fn create_assigns_sequential_positive_ids() {
        let store = InMemoryPostStore::new();

        for expected in 1..=3 {
            let created = store.create(sample_post()).await.unwrap();
            assert_eq!(created.id, expected);
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_post() {
        let store = InMemoryPostStore::new();
        let created = store.create(sample_post()).await.unwrap();

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Test Post");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn get_missing_post_is_not_found() {
        let store = InMemoryPostStore::new();
        assert_eq!(store.get(999).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn update_forces_stored_id() {
        let store = InMemoryPostStore::new();
        let created = store.create(sample_post()).await.unwrap();

        let mut replacement = sample_post();
        replacement.id = 999;
        replacement.title = "Renamed".to_string();

        let updated = store.update(created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(created.id).await.unwrap().title, "Renamed");
        assert_eq!(store.get(999).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found_and_inserts_nothing() {
        let store = InMemoryPostStore::new();

        let err = store.update(42, sample_post()).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound);
        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_post() {
        let store = InMemoryPostStore::new();
        let a = store.create(sample_post()).await.unwrap();
        let b = store.create(sample_post()).await.unwrap();
        let c = store.create(sample_post()).await.unwrap();
        assert_eq!(store.get_all().await.len(), 3);

        store.delete(b.id).await.unwrap();

        assert_eq!(store.get_all().await.len(), 2);
        assert_eq!(store.get(b.id).await.unwrap_err(), StoreError::NotFound);
        assert!(store.get(a.id).await.is_ok());
        assert!(store.get(c.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_post_is_not_found() {
        let store = InMemoryPostStore::new();
        assert_eq!(store.delete(1).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reassigned() {
        let store = InMemoryPostStore::new();
        let first = store.create(sample_post()).await.unwrap();
        let second = store.create(sample_post()).await.unwrap();

        store.delete(first.id).await.unwrap();

        let third = store.create(sample_post()).await.unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_creates_assign_gapless_ids() {
        const WRITERS: u64 = 32;

        let store = Arc::new(InMemoryPostStore::new());
        let mut handles = Vec::new();

        for _ in 0..WRITERS {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create(sample_post()).await.unwrap().id
            }));
        }

        let mut ids = BTreeSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        let expected: BTreeSet<u64> = (1..=WRITERS).collect();
        assert_eq!(ids, expected);
        assert_eq!(store.get_all().await.len(), WRITERS as usize);
    }
}
