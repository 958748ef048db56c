//! Ports - trait abstractions implemented by the infrastructure layer.

mod store;

pub use store::PostStore;
