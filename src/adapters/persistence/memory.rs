//! In-memory blob store.
//!
//! Same contract as the file store without touching disk. Backs the
//! test suite, where every repository behavior short of actual file
//! I/O can run against it.

use std::cell::RefCell;
use std::io;

use crate::ports::store::BlobStore;

/// Volatile document store backed by an in-process string.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, as if `text` had been saved earlier.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
        }
    }
}

impl BlobStore for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.text.borrow().clone())
    }

    fn save(&self, text: &str) -> io::Result<()> {
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
