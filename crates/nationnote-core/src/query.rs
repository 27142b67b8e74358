// crates/nationnote-core/src/query.rs

//! # Query Engine
//!
//! Derives a filtered view from a collection and the current filter state.
//! The same code serves the browse view and favorites-scoped views: it is
//! generic over anything that exposes a [`CountryRecord`].
//!
//! - Search: case-insensitive substring on the common name. A blank term
//!   (after trimming) matches everything.
//! - Region: exact, case-sensitive. An empty selection matches everything.
//!
//! Both predicates are ANDed. The input is never mutated and the output
//! keeps the input's relative order.

use crate::model::CountryRecord;
use crate::traits::{NameMatch, RegionMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Regions offered by the region selector.
pub const KNOWN_REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub region: String,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            region: region.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty() && self.region.is_empty()
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        record.name_contains(self.search_term.trim()) && record.in_region(&self.region)
    }
}

/// Returns the matching items, in input order.
pub fn filter<T>(items: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: AsRef<CountryRecord> + Clone,
{
    items
        .iter()
        .filter(|item| criteria.matches(item.as_ref()))
        .cloned()
        .collect()
}

/// Distinct regions present in `records`, sorted.
pub fn available_regions(records: &[CountryRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
