use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - represents a blog post.
///
/// The id is assigned by the store on create; a freshly built post carries
/// id 0 until then. Ids are strictly positive once assigned and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with fresh timestamps. `created_at == updated_at`
    /// until the first update.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the updated timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
