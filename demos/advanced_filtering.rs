//! Advanced filtering example for nationnote-rs
//!
//! This example uses the engines directly on the built-in sample set, without
//! a session or network access.

use nationnote_core::prelude::*;
use nationnote_core::query::available_regions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== NationNote Advanced Filtering Example ===\n");

    let countries = sample_countries();

    // Example 1: Regions present in the data
    println!("--- Example 1: Regions ---");
    println!("  {}", available_regions(&countries).join(", "));
    println!();

    // Example 2: Every region, largest country first
    println!("--- Example 2: Largest country per region ---");
    for region in KNOWN_REGIONS {
        let members = filter(&countries, &FilterCriteria::new("", region));
        let ranked = sort(members, &SortField::Population, SortDirection::Descending);
        match ranked.first() {
            Some(top) => println!(
                "  {region:<9} {} ({})",
                top.name(),
                top.population_display('.')
            ),
            None => println!("  {region:<9} -"),
        }
    }
    println!();

    // Example 3: Sorting by a raw attribute
    println!("--- Example 3: Sort by ISO alpha-3 code ---");
    let by_code = sort(countries.clone(), &SortField::parse("cca3"), SortDirection::Ascending);
    for country in &by_code {
        println!(
            "  {} {}",
            country.cca3.as_deref().unwrap_or("---"),
            country.name()
        );
    }
    println!();

    // Example 4: Detail fields
    println!("--- Example 4: Country details ---");
    if let Some(country) = countries.iter().find(|c| c.is_named("indonesia")) {
        println!("  Name:       {}", country.name());
        println!("  Capital:    {}", country.capital_display());
        println!("  Languages:  {}", country.languages_display());
        println!("  Currencies: {}", country.currencies_display());
        println!("  Timezones:  {}", country.timezones_display());
        println!("  Status:     {}", country.independence_display());
    }
    println!();

    // Example 5: Manual pagination with a small page size
    println!("--- Example 5: Pages of three ---");
    let ordered = sort(countries, &SortField::Name, SortDirection::Ascending);
    let first = paginate(&ordered, 3, 1)?;
    for n in 1..=first.total_pages {
        let page = paginate(&ordered, 3, n)?;
        let names: Vec<_> = page.items.iter().map(|c| c.name()).collect();
        println!("  page {n}: {}", names.join(", "));
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
