//! Category aggregation.
//!
//! Pure function from an expense slice to per-category totals. No
//! persistence interaction; the repository feeds it whatever a boat's
//! current list is.
//!
//! Amounts cross the wire as `f64` (JSON numbers) but accumulate as
//! `Decimal`, so 0.1 + 0.2 style drift never reaches the displayed
//! totals. A non-finite amount converts to zero; JSON cannot encode one
//! and creation rejects them, so the rule only matters for hand-built
//! books in tests.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

use super::category::Category;
use super::expense::Expense;

/// Per-category totals for one boat, in fixed category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    totals: IndexMap<Category, Decimal>,
}

impl CategorySummary {
    /// Total for one bucket. Every fixed category is present, zero
    /// included, so renders stay visually stable.
    pub fn total(&self, category: Category) -> Decimal {
        self.totals.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Grand total across all buckets.
    pub fn grand_total(&self) -> Decimal {
        self.totals.values().copied().sum()
    }

    /// (category, total) pairs in fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.totals.iter().map(|(c, t)| (*c, *t))
    }
}

/// Group a boat's expenses by category, summing amounts.
///
/// Every category in the fixed set starts at zero; each expense lands in
/// the bucket its label resolves to, unknown and missing labels in the
/// catch-all.
pub fn summarize(expenses: &[Expense]) -> CategorySummary {
    let mut totals: IndexMap<Category, Decimal> = Category::ALL
        .into_iter()
        .map(|c| (c, Decimal::ZERO))
        .collect();

    for expense in expenses {
        let bucket = Category::resolve(expense.category.as_deref());
        let amount = Decimal::from_f64(expense.amount).unwrap_or(Decimal::ZERO);
        if let Some(total) = totals.get_mut(&bucket) {
            *total += amount;
        }
    }

    CategorySummary { totals }
}
