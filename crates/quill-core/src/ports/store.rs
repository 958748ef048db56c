use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Post store port - the authoritative keeper of all post records.
///
/// Implementations must serialize writes and allow concurrent reads; every
/// returned `Post` is a consistent snapshot, never a torn read.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post, assigning it the next free id. Returns the stored
    /// record with its id set.
    async fn create(&self, post: Post) -> Result<Post, StoreError>;

    /// Fetch a single post by id.
    async fn get(&self, id: u64) -> Result<Post, StoreError>;

    /// Snapshot of all posts, in unspecified order.
    async fn get_all(&self) -> Vec<Post>;

    /// Overwrite the post stored under `id` with `post`'s fields. The stored
    /// id always remains `id`, whatever the payload claims.
    async fn update(&self, id: u64, post: Post) -> Result<Post, StoreError>;

    /// Remove a post permanently.
    async fn delete(&self, id: u64) -> Result<(), StoreError>;
}
