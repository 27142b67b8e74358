//! Basic usage example for nationnote-rs
//!
//! This example demonstrates how to:
//! - Load the country directory (falling back to sample data when offline)
//! - Search, filter by region and sort
//! - Walk through pages
//! - Favorite a country with a note
//!
//! Run with `RUST_LOG=nationnote_core=debug` to see the engine's log.

use nationnote_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_page(snap: &Snapshot, separator: char) {
    for item in &snap.page_items {
        let star = if item.is_favorite { "★" } else { " " };
        println!(
            "  {star} {:<24} {:<18} {:>15}",
            item.record.name(),
            item.record.capital_display(),
            item.record.population_display(separator)
        );
    }
    let strip: Vec<String> = snap
        .page_numbers
        .iter()
        .map(|m| match m {
            PageMarker::Page(n) if *n == snap.current_page => format!("[{n}]"),
            PageMarker::Page(n) => n.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect();
    println!("  pages: {}  ({} matches)", strip.join(" "), snap.total_matches);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== NationNote Basic Usage Example ===\n");

    let config = DirectoryConfig::default();
    let separator = config.thousands_separator;
    let mut dir = Directory::http(config)?;

    // Example 1: Initial load
    println!("--- Example 1: Load all countries ---");
    let snap = dir.reload()?;
    if snap.degraded {
        println!("(country service unreachable, showing offline sample data)");
    }
    println!("Loaded {} countries", dir.records().len());
    print_page(dir.snapshot(), separator);
    println!();

    // Example 2: Region filter plus search
    println!("--- Example 2: Asian countries containing 'in' ---");
    dir.set_region("Asia")?;
    print_page(dir.search("in")?, separator);
    println!();

    // Example 3: Sort by population, descending
    println!("--- Example 3: Sort by population (click twice) ---");
    dir.search("")?;
    dir.set_region("")?;
    dir.sort_by("population")?;
    let snap = dir.sort_by("population")?;
    if let Some(sort) = &snap.view.sort {
        println!("Sorted by {} {}", sort.field, sort.direction.arrow());
    }
    print_page(snap, separator);
    println!();

    // Example 4: Paging
    println!("--- Example 4: Next page ---");
    print_page(dir.next_page()?, separator);
    println!();

    // Example 5: Favorites
    println!("--- Example 5: Favorite a country ---");
    let key = IdentityKey::from("Japan");
    if dir.get(&key).is_some() {
        dir.favorite(&key, "want to visit")?;
        for entry in &dir.snapshot().favorites {
            println!("  ★ {} – \"{}\"", entry.record.name(), entry.note);
        }
    } else {
        println!("  Japan is not in the current collection");
    }
    println!();

    // Example 6: Statistics
    println!("--- Example 6: Directory statistics ---");
    let stats = dir.stats();
    println!("Countries: {}", stats.countries);
    println!("Regions: {}", stats.regions);
    println!("Favorites: {}", stats.favorites);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
