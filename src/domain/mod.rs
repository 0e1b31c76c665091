//! Domain layer - Core expense types and logic.
//!
//! Pure data and transformations for the expense book: no file I/O, no
//! logging, no knowledge of where the document is stored. Everything
//! here is serializable and testable in isolation.

pub mod category;
pub mod expense;
pub mod summary;

// Re-export core types for convenience
pub use category::Category;
pub use expense::{Expense, ExpenseBook, SEED_BOATS};
pub use summary::{CategorySummary, summarize};
