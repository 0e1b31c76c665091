//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that aggregation and the repository
//! maintain their invariants across random inputs.

use proptest::prelude::*;
use rust_decimal::Decimal;

use boat_expenses::adapters::persistence::MemoryStore;
use boat_expenses::domain::{Category, Expense, ExpenseBook, summarize};
use boat_expenses::usecases::ExpenseRepository;

/// Amounts as cents so expectations stay exact.
fn arb_amount_cents() -> impl Strategy<Value = u32> {
    0u32..1_000_000
}

fn arb_category() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(
            Category::ALL.map(|c| c.label().to_string()).to_vec()
        )
        .prop_map(Some),
        "[A-Za-z]{1,12}".prop_map(Some),
    ]
}

fn arb_expense() -> impl Strategy<Value = Expense> {
    (arb_amount_cents(), arb_category(), "[a-z]{1,16}").prop_map(
        |(cents, category, description)| Expense {
            description,
            amount: f64::from(cents) / 100.0,
            category,
            date: "2026-08-29".to_string(),
        },
    )
}

fn cents_total(expenses: &[Expense]) -> Decimal {
    expenses
        .iter()
        .map(|e| Decimal::new((e.amount * 100.0).round() as i64, 2))
        .sum()
}

proptest! {
    /// Bucket totals always partition the input total exactly.
    #[test]
    fn summary_buckets_partition_the_total(
        expenses in prop::collection::vec(arb_expense(), 0..50),
    ) {
        let summary = summarize(&expenses);
        prop_assert_eq!(summary.grand_total(), cents_total(&expenses));
    }

    /// Everything without a known label lands in the catch-all bucket.
    #[test]
    fn unknown_labels_land_in_catch_all(
        expenses in prop::collection::vec(arb_expense(), 0..50),
    ) {
        let summary = summarize(&expenses);

        let known: Vec<Expense> = expenses
            .iter()
            .filter(|e| {
                e.category.as_deref().is_some_and(|c| {
                    Category::ALL.iter().any(|k| k.label() == c && *k != Category::CATCH_ALL)
                })
            })
            .cloned()
            .collect();
        let rest = cents_total(&expenses) - cents_total(&known);

        prop_assert_eq!(summary.total(Category::CATCH_ALL), rest);
    }

    /// Serialize-then-parse of any book is the identity.
    #[test]
    fn document_codec_round_trips(
        expenses in prop::collection::vec(arb_expense(), 0..30),
    ) {
        let mut book = ExpenseBook::seed();
        for e in expenses {
            book.push("Thamira", e);
        }
        let reread = ExpenseBook::from_json(&book.to_json_pretty()).unwrap();
        prop_assert_eq!(reread, book);
    }

    /// Deleting any valid index shrinks the list by one and keeps the
    /// relative order of the survivors.
    #[test]
    fn delete_preserves_survivor_order(
        expenses in prop::collection::vec(arb_expense(), 1..30),
        index_seed in any::<prop::sample::Index>(),
    ) {
        let repo = ExpenseRepository::new(MemoryStore::new());
        for e in &expenses {
            repo.add_expense("Thamira", e.clone()).unwrap();
        }

        let index = index_seed.index(expenses.len());
        repo.delete_expense("Thamira", index).unwrap();

        let mut expected = expenses;
        expected.remove(index);
        prop_assert_eq!(repo.list_expenses("Thamira").unwrap(), expected);
    }
}
