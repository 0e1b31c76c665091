//! JSON file store - atomic whole-document persistence.
//!
//! Saves the expense document to `boat-expenses.json` using atomic
//! writes (write to tmp file, then rename). The file on disk is always
//! either the old or the new document, never a partial write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::ports::store::BlobStore;

/// Default document file name inside the data directory.
pub const STORE_FILE: &str = "boat-expenses.json";

/// Atomic JSON document store.
pub struct JsonFileStore {
    /// Path to boat-expenses.json.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl JsonFileStore {
    /// Create a store in the given data directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(data_dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)?;

        Ok(Self {
            path: dir.join(STORE_FILE),
            tmp_path: dir.join(format!("{STORE_FILE}.tmp")),
        })
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                debug!(path = %self.path.display(), bytes = text.len(), "Document loaded");
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No document yet, starting fresh");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, text: &str) -> io::Result<()> {
        // Write to tmp file, then atomic rename
        fs::write(&self.tmp_path, text)?;
        fs::rename(&self.tmp_path, &self.path)?;

        debug!(path = %self.path.display(), bytes = text.len(), "Document saved");
        Ok(())
    }
}
