//! Persistence Adapters - JSON Document Storage
//!
//! Implements the `BlobStore` port: an atomic file-backed store for
//! normal runs and a volatile in-memory store for tests and dry runs.
//! No database dependency — the whole dataset is one small document.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
