//! Post store implementations - in-memory with seed-file bootstrap.

mod memory;
mod seed;

pub use memory::InMemoryPostStore;
pub use seed::{SeedError, SeedFile, SeedPost};
