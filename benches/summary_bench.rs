//! Aggregation Benchmarks — Summary Recompute Cost
//!
//! The summary is recomputed from scratch after every mutation, so it
//! should stay cheap well past the expected dataset size (tens to low
//! hundreds of records).
//!
//! Run with: cargo bench --bench summary_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use boat_expenses::domain::{Category, Expense, summarize};

fn sample_expenses(n: usize) -> Vec<Expense> {
    (0..n)
        .map(|i| Expense {
            description: format!("expense {i}"),
            amount: (i % 500) as f64 / 4.0,
            category: match i % 7 {
                0 => None,
                1 => Some("Misc".to_string()),
                k => Some(Category::ALL[k % 5].label().to_string()),
            },
            date: "2026-08-29".to_string(),
        })
        .collect()
}

/// Benchmark category aggregation at and beyond realistic sizes.
fn bench_summarize(c: &mut Criterion) {
    for n in [100usize, 1_000, 10_000] {
        let expenses = sample_expenses(n);
        c.bench_function(&format!("summarize_{n}"), |b| {
            b.iter(|| summarize(black_box(&expenses)));
        });
    }
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
