//! Error taxonomy for the expense core.
//!
//! Every variant is user-facing: the CLI prints it and leaves the
//! persisted dataset exactly as it was before the failed operation.

use thiserror::Error;

/// Failures surfaced by the repository, codec, and store adapters.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// The persisted document exists but is not a valid expense book.
    ///
    /// Deliberately distinct from the absent-document case (which seeds
    /// a fresh book): a corrupt file is reported, never silently replaced.
    #[error("persisted expense data is corrupt: {source}")]
    CorruptData {
        #[source]
        source: serde_json::Error,
    },

    /// Imported text did not parse as a boat -> expenses document.
    #[error("import rejected: not a valid expense document")]
    InvalidImport,

    /// Delete index outside the boat's list.
    #[error("no expense at index {index} for boat '{boat}' (len {len})")]
    IndexOutOfRange {
        boat: String,
        index: usize,
        len: usize,
    },

    /// Amount was not a finite, non-negative number.
    #[error("invalid amount {amount}: must be a finite, non-negative number")]
    InvalidAmount { amount: f64 },

    /// Underlying blob store failure (file I/O and friends).
    #[error("store error: {0}")]
    Store(#[from] std::io::Error),
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, ExpenseError>;
