//! Domain-level error types.

use thiserror::Error;

/// Store-level errors.
///
/// The store has exactly one failure mode: the referenced post does not
/// exist. Insertion cannot fail and concurrent access is serialized by the
/// store's lock.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("post not found")]
    NotFound,
}
