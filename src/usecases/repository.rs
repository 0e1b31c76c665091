//! Expense Repository - Boat-scoped Operations over the Store
//!
//! Orchestrates the domain codec with the blob store port. Stateless by
//! design: no cached book, no ambient "current boat". Every operation
//! re-reads the full document first, so the latest persisted state is
//! always observed; the dataset is tens to low hundreds of records, so
//! the read-modify-write cost is irrelevant.

use tracing::{info, warn};

use crate::domain::{CategorySummary, Expense, ExpenseBook, summarize};
use crate::error::Result;
use crate::ports::store::BlobStore;

/// Boat-scoped CRUD over the persisted expense book.
pub struct ExpenseRepository<S: BlobStore> {
  store: S,
}

impl<S: BlobStore> ExpenseRepository<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Current book: the seed when nothing was ever saved, otherwise the
  /// decoded document. Corrupt text is an error, never the seed.
  pub fn book(&self) -> Result<ExpenseBook> {
    match self.store.load()? {
      Some(text) => ExpenseBook::from_json(&text),
      None => Ok(ExpenseBook::seed()),
    }
  }

  fn persist(&self, book: &ExpenseBook) -> Result<()> {
    self.store.save(&book.to_json())?;
    Ok(())
  }

  /// Record an expense for `boat`, creating the boat entry if absent.
  ///
  /// The amount is validated here, at the creation boundary; imported
  /// documents are taken as-is.
  pub fn add_expense(&self, boat: &str, expense: Expense) -> Result<()> {
    Expense::validate_amount(expense.amount)?;

    let mut book = self.book()?;
    book.push(boat, expense);
    self.persist(&book)?;

    info!(boat, total = book.expenses(boat).len(), "Expense recorded");
    Ok(())
  }

  /// Delete the expense at `index` in `boat`'s list.
  ///
  /// Fails without persisting anything when the index is out of range,
  /// so a stale view never deletes the wrong record silently.
  pub fn delete_expense(&self, boat: &str, index: usize) -> Result<Expense> {
    let mut book = self.book()?;
    let removed = book.remove(boat, index).inspect_err(|e| {
      warn!(boat, index, error = %e, "Delete rejected");
    })?;
    self.persist(&book)?;

    info!(boat, index, description = %removed.description, "Expense deleted");
    Ok(removed)
  }

  /// A boat's expenses in insertion order; empty for unknown boats.
  pub fn list_expenses(&self, boat: &str) -> Result<Vec<Expense>> {
    Ok(self.book()?.expenses(boat).to_vec())
  }

  /// Boat names in display order.
  pub fn boats(&self) -> Result<Vec<String>> {
    Ok(self.book()?.boats().map(String::from).collect())
  }

  /// Category totals for one boat. Read path only.
  pub fn summary(&self, boat: &str) -> Result<CategorySummary> {
    Ok(summarize(self.book()?.expenses(boat)))
  }

  /// Wholesale replacement of the persisted book.
  pub fn replace_all(&self, book: &ExpenseBook) -> Result<()> {
    self.persist(book)?;
    info!(boats = book.boats().count(), "Book replaced");
    Ok(())
  }

  /// Import user-supplied document text.
  ///
  /// Rejects anything that is not the boat -> expenses shape and leaves
  /// the persisted book untouched on failure.
  pub fn import_json(&self, text: &str) -> Result<()> {
    let book = ExpenseBook::from_import(text).inspect_err(|e| {
      warn!(error = %e, "Import rejected");
    })?;
    self.replace_all(&book)
  }

  /// The full book as pretty-printed, copyable text.
  pub fn export_json(&self) -> Result<String> {
    Ok(self.book()?.to_json_pretty())
  }
}
