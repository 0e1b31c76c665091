//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) the repository requires from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `BlobStore`: whole-document key-value persistence

pub mod store;

pub use store::BlobStore;
