//! Boat Expenses — Entry Point
//!
//! Command-line front end over the expense repository. This layer owns
//! everything the core must not: the active boat, file reading for
//! imports, and rendering. The repository and aggregator stay stateless
//! and take the boat as an explicit argument.
//!
//! Wiring sequence:
//! 1. Load config.toml (defaults when absent)
//! 2. Init tracing (stderr, so exported JSON on stdout stays clean)
//! 3. Open the JSON file store in the configured data directory
//! 4. Dispatch one command against the repository

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

mod adapters;
mod config;
mod domain;
mod error;
mod ports;
mod usecases;

use adapters::persistence::JsonFileStore;
use domain::Expense;
use ports::store::BlobStore;
use usecases::ExpenseRepository;

const USAGE: &str = "\
boat-expenses — per-boat expense ledger

USAGE:
    boat-expenses boats
    boat-expenses list [BOAT]
    boat-expenses add BOAT DESCRIPTION AMOUNT [CATEGORY] [DATE]
    boat-expenses delete BOAT INDEX
    boat-expenses summary [BOAT]
    boat-expenses export
    boat-expenses import FILE

BOAT defaults to fleet.default_boat from config.toml where omitted.
DATE is YYYY-MM-DD and defaults to today.";

fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── 3. Open the document store ──────────────────────────
    let store = JsonFileStore::new(&config.storage.data_dir)
        .context("Failed to open data directory")?;
    let repo = ExpenseRepository::new(store);

    // ── 4. Dispatch ─────────────────────────────────────────
    let args: Vec<String> = std::env::args().skip(1).collect();
    let default_boat = config.fleet.default_boat;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["boats"] => {
            for boat in repo.boats()? {
                println!("{boat}");
            }
        }
        ["list", rest @ ..] => {
            let boat = boat_arg(rest.first().copied(), &default_boat);
            render_list(&repo, &boat)?;
        }
        ["add", boat, description, amount, rest @ ..] => {
            let amount: f64 = amount
                .parse()
                .with_context(|| format!("'{amount}' is not a number"))?;
            let expense = Expense {
                description: (*description).to_string(),
                amount,
                category: rest.first().map(|c| (*c).to_string()),
                date: parse_date(rest.get(1).copied())?,
            };
            repo.add_expense(boat, expense)?;
            render_list(&repo, boat)?;
        }
        ["delete", boat, index] => {
            let index: usize = index
                .parse()
                .with_context(|| format!("'{index}' is not an index"))?;
            let removed = repo.delete_expense(boat, index)?;
            println!(
                "deleted [{index}] {} – ${:.2}",
                removed.description, removed.amount
            );
        }
        ["summary", rest @ ..] => {
            let boat = boat_arg(rest.first().copied(), &default_boat);
            let summary = repo.summary(&boat)?;
            println!("{boat}");
            for (category, total) in summary.iter() {
                println!("  {category:<14} ${}", total.round_dp(2));
            }
            println!("  {:<14} ${}", "Total", summary.grand_total().round_dp(2));
        }
        ["export"] => {
            // Copyable text on stdout; redirect to a file to share it.
            println!("{}", repo.export_json()?);
        }
        ["import", file] => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {file}"))?;
            repo.import_json(&text)?;
            println!("imported {file}");
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn boat_arg(explicit: Option<&str>, default_boat: &str) -> String {
    explicit.unwrap_or(default_boat).to_string()
}

/// Validate a YYYY-MM-DD date argument, defaulting to today.
fn parse_date(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(d) => {
            NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .with_context(|| format!("'{d}' is not a YYYY-MM-DD date"))?;
            Ok(d.to_string())
        }
        None => Ok(Utc::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}

fn render_list<S: BlobStore>(repo: &ExpenseRepository<S>, boat: &str) -> Result<()> {
    let expenses = repo.list_expenses(boat)?;
    if expenses.is_empty() {
        println!("{boat}: no expenses");
        return Ok(());
    }
    println!("{boat}");
    for (i, exp) in expenses.iter().enumerate() {
        let cat = exp.category.as_deref().filter(|c| !c.is_empty());
        let tag = cat.map_or(String::new(), |c| format!("[{c}] "));
        println!(
            "  [{i}] {tag}{}: {} – ${:.2}",
            exp.date, exp.description, exp.amount
        );
    }
    Ok(())
}
