//! Error handling example for nationnote-rs
//!
//! This example demonstrates how each failing command reports its error and
//! leaves the directory unchanged.

use nationnote_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== NationNote Error Handling Example ===\n");

    // Example 1: Invalid configuration
    println!("--- Example 1: Rejected configuration ---");
    for config in [
        DirectoryConfig::default().with_page_size(0),
        DirectoryConfig::default().with_base_url("not a url"),
    ] {
        match Directory::http(config) {
            Ok(_) => println!("  accepted"),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 2: Degraded mode
    println!("--- Example 2: Unreachable service ---");
    let config = DirectoryConfig::default().with_base_url("http://127.0.0.1:9");
    let mut dir = Directory::http(config)?;
    let snap = dir.reload()?.clone();
    println!(
        "  degraded: {}, loading: {}, countries: {}",
        snap.degraded,
        snap.loading,
        dir.records().len()
    );
    println!();

    // Example 3: Lookups that fail
    println!("--- Example 3: Name lookups ---");
    for term in ["", "japan"] {
        match dir.lookup_by_name(term) {
            Ok(snap) => println!("  {term:?}: {:?}", snap.names()),
            Err(e @ DirectoryError::Validation(_)) => println!("  {term:?}: ignored ({e})"),
            Err(e) => println!("  {term:?}: ✗ {e}"),
        }
    }
    println!("  collection still has {} countries", dir.records().len());
    println!();

    // Example 4: Domain rules
    println!("--- Example 4: Favorites and records ---");
    let japan = IdentityKey::from("Japan");
    dir.favorite(&japan, "want to visit")?;
    if let Err(e) = dir.favorite(&japan, "different note") {
        println!("  ✗ {e}");
    }
    if let Some(entry) = dir.favorites().get(&japan) {
        println!("  note kept: {:?}", entry.note);
    }
    if let Err(e) = dir.delete_country(&japan) {
        println!("  ✗ {e}");
    }
    if let Err(e) = dir.create_country(CountryDraft::named("   ")) {
        println!("  ✗ {e}");
    }
    if let Err(e) = dir.favorite(&IdentityKey::from("Atlantis"), "") {
        println!("  ✗ {e}");
    }
    println!();

    // Example 5: Paging past the end
    println!("--- Example 5: Out-of-range page ---");
    let total = dir.snapshot().total_pages;
    match dir.go_to_page(total + 1) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!("  still on page {}", dir.snapshot().current_page);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
