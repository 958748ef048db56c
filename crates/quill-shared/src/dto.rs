//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. All three fields are required and must be
/// non-empty; absent fields decode as empty strings and fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to update a post. Only the fields present (and non-empty) in the
/// payload are applied; the rest keep their stored values. Known limitation:
/// this means a field cannot be cleared to the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// A post as exposed over the wire. Timestamps serialize as RFC 3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Confirmation body for operations with nothing else to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
