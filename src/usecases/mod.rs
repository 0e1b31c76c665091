//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the domain codec with the store port. One use case
//! exists here:
//! - `ExpenseRepository`: boat-scoped add/delete/list, category
//!   summaries, and wholesale export/import of the document.

pub mod repository;

pub use repository::ExpenseRepository;
