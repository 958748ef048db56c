//! # Quill Infra
//!
//! Infrastructure layer - concrete implementations of the ports defined in
//! `quill-core`. Currently a single adapter: the in-memory post store.

pub mod store;
