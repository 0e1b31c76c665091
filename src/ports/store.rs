//! Blob store port - whole-document persistence interface.
//!
//! The expense book is persisted as one serialized document under one
//! logical key. This trait is that key-value surface: load the whole
//! text or save the whole text, nothing incremental. The repository
//! never touches files directly; adapters implement this trait.

use std::io;

/// Whole-document text persistence.
pub trait BlobStore {
  /// Read the persisted document.
  ///
  /// `Ok(None)` means nothing was ever saved — distinct from a read
  /// failure, and distinct again from saved-but-corrupt text, which is
  /// the codec's call to make.
  fn load(&self) -> io::Result<Option<String>>;

  /// Overwrite the persisted document with `text` in full.
  fn save(&self, text: &str) -> io::Result<()>;
}
