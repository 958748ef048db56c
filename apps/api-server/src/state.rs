//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::store::InMemoryPostStore;

/// Shared application state. The store is injected as a trait object so
/// tests can construct independent instances.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Build the production state: a fresh in-memory store with the seed
    /// document applied. Seed failure is a degraded start, not a fatal one -
    /// the server comes up with an empty store.
    pub async fn bootstrap(seed_file: &str) -> Self {
        let store = InMemoryPostStore::new();

        if let Err(e) = store.load_seed_file(seed_file).await {
            tracing::warn!("failed to load seed data from {}: {}", seed_file, e);
        }

        Self::new(Arc::new(store))
    }
}
