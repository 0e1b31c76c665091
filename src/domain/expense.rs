//! Core expense dataset types.
//!
//! An [`Expense`] is immutable once recorded: there is no edit operation,
//! only delete or wholesale import. The [`ExpenseBook`] is the entire
//! persisted dataset — an ordered map from boat name to that boat's
//! expense list, serialized as one JSON document:
//!
//! ```json
//! { "<boat>": [ { "description": "...", "amount": 12.5,
//!                 "category": "Combustible", "date": "2026-08-29" } ] }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, Result};

/// Boats every fresh book starts with, in display order.
pub const SEED_BOATS: [&str; 3] = ["Punta Martiño", "Praia Canelas", "Thamira"];

/// A single dated, categorized expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Free-form description.
    pub description: String,
    /// Amount in the book's (single, unconverted) currency.
    pub amount: f64,
    /// Free-form category label; resolved to a fixed bucket at
    /// aggregation time. Absent in some imported documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
}

impl Expense {
    /// Validate the amount for a newly recorded expense.
    ///
    /// This is the reject-at-creation policy: a non-finite or negative
    /// amount never enters the book, so sums downstream stay meaningful.
    pub fn validate_amount(amount: f64) -> Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExpenseError::InvalidAmount { amount });
        }
        Ok(())
    }
}

/// The whole dataset: boat name -> ordered expense list.
///
/// Insertion order is the only addressing mechanism (deletes are by
/// index), so both the boat map and each list preserve order exactly
/// as persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseBook(pub IndexMap<String, Vec<Expense>>);

impl ExpenseBook {
    /// Fresh book used when no document has ever been saved:
    /// the three seed boats, each with an empty list.
    pub fn seed() -> Self {
        Self(
            SEED_BOATS
                .into_iter()
                .map(|boat| (boat.to_string(), Vec::new()))
                .collect(),
        )
    }

    /// Decode a persisted document.
    ///
    /// Unparsable or mis-shaped text is a [`ExpenseError::CorruptData`]
    /// error, never a silent fallback to the seed book.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| ExpenseError::CorruptData { source })
    }

    /// Parse user-supplied import text.
    ///
    /// Same document shape as [`Self::from_json`], but failures are
    /// reported as [`ExpenseError::InvalidImport`]: a bare number,
    /// string, null, or wrong-shaped object is rejected and the caller
    /// keeps its current book.
    pub fn from_import(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|_| ExpenseError::InvalidImport)
    }

    /// Serialize for persistence (compact).
    pub fn to_json(&self) -> String {
        // An IndexMap of plain structs cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serialize for export: the same document, human-readable.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Boat names in display order.
    pub fn boats(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// A boat's expenses; empty slice when the boat is unknown.
    pub fn expenses(&self, boat: &str) -> &[Expense] {
        self.0.get(boat).map_or(&[], Vec::as_slice)
    }

    /// Append an expense, creating the boat entry if absent.
    pub fn push(&mut self, boat: &str, expense: Expense) {
        self.0.entry(boat.to_string()).or_default().push(expense);
    }

    /// Remove the expense at `index` from `boat`'s list.
    ///
    /// Survivors keep their relative order. Out-of-range indices and
    /// unknown boats leave the book untouched and report the error.
    pub fn remove(&mut self, boat: &str, index: usize) -> Result<Expense> {
        let list = self.0.get_mut(boat);
        let len = list.as_ref().map_or(0, |l| l.len());
        match list {
            Some(list) if index < len => Ok(list.remove(index)),
            _ => Err(ExpenseError::IndexOutOfRange {
                boat: boat.to_string(),
                index,
                len,
            }),
        }
    }
}
