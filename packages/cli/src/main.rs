#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Operator CLI for the callejero street-name engine.
//!
//! Loads the dataset pair and answers resolution questions from the
//! terminal: how many names resolve, what a given name normalizes to,
//! and what a search query returns. Useful for auditing dataset edits
//! before deploying them.

use std::path::PathBuf;

use callejero_catalog::{StreetCatalog, load_catalog};
use callejero_history::{normalize, variants};
use callejero_search::{MIN_QUERY_LEN, SEARCH_RESULT_LIMIT};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "callejero_cli", about = "Street-name resolution toolbox")]
struct Cli {
    /// Path to the historical dataset JSON.
    #[arg(long, default_value = "data/historical.json")]
    history: PathBuf,

    /// Path to the geometry dataset GeoJSON.
    #[arg(long, default_value = "data/streets.geojson")]
    geometry: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dataset and resolution statistics
    Stats,
    /// Search catalog names the way the map's search box does
    Search {
        /// Query text (same minimum length as the UI applies)
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = SEARCH_RESULT_LIMIT)]
        limit: usize,
    },
    /// Show how a name normalizes and what it resolves to
    Resolve {
        /// Street name as written anywhere (geometry, records, or by hand)
        name: String,
    },
    /// List catalog names
    Names {
        /// Only names without a resolved historical record
        #[arg(long)]
        unmatched: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.history, &cli.geometry)?;

    match cli.command {
        Commands::Stats => stats(&catalog),
        Commands::Search { query, limit } => search(&catalog, &query, limit),
        Commands::Resolve { name } => resolve(&catalog, &name),
        Commands::Names { unmatched } => names(&catalog, unmatched),
    }

    Ok(())
}

fn stats(catalog: &StreetCatalog) {
    let total = catalog.len();
    let with_history = catalog.entries().filter(|e| e.history.is_some()).count();
    let segments: usize = catalog.entries().map(|e| e.segments.len()).sum();

    println!("Street names:   {total}");
    println!("Segments:       {segments}");
    println!("With history:   {with_history}");
    println!("Unmatched:      {}", total - with_history);
}

fn search(catalog: &StreetCatalog, query: &str, limit: usize) {
    if query.chars().count() < MIN_QUERY_LEN {
        println!("Query too short (minimum {MIN_QUERY_LEN} characters)");
        return;
    }

    let hits = callejero_search::search(query, catalog, limit);
    if hits.is_empty() {
        println!("No matches");
        return;
    }

    for hit in hits {
        let marker = if hit.has_history { "*" } else { " " };
        println!("{marker} {}", hit.name);
    }
}

fn resolve(catalog: &StreetCatalog, name: &str) {
    println!("Canonical key:  {}", normalize(name));

    let keys = variants(name);
    if keys.len() > 1 {
        println!("Variant keys:");
        for key in &keys {
            println!("  {key}");
        }
    }

    match catalog.get(name) {
        Some(entry) => {
            println!("Segments:       {}", entry.segments.len());
            match &entry.history {
                Some(record) => {
                    println!("Resolved to:    {}", record.current_name);
                    if let Some(basis) = &record.legal_basis {
                        println!("Legal basis:    {basis}");
                    }
                    for prev in &record.previous_names {
                        println!("Formerly:       {}", prev.name());
                    }
                }
                None => println!("No historical record"),
            }
        }
        None => println!("Not in the street catalog"),
    }
}

fn names(catalog: &StreetCatalog, unmatched: bool) {
    for entry in catalog.entries() {
        if unmatched && entry.history.is_some() {
            continue;
        }
        println!("{}", entry.name);
    }
}
