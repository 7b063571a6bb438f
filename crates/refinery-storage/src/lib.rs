//! # refinery-storage
//!
//! Concept database stores: a pretty-printed JSON file on disk, and an
//! in-memory store for tests and embedding callers.

pub mod json_store;
pub mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::InMemoryStore;
