// crates/nationnote-core/src/sort.rs

//! # Sort Engine
//!
//! Orders any list of records by a field and direction.
//!
//! - String fields compare case-insensitively. A missing value sorts as the
//!   highest possible string, so missing capitals come last when ascending.
//! - `population` compares numerically, a missing value counts as `0`.
//! - Unknown fields compare the record's raw attribute of that name as a
//!   string (see [`CountryRecord::attribute`]).
//!
//! The sort is stable: equal keys keep their pre-sort relative order in both
//! directions. Descending is the reversed comparator, not a reversed output.

use crate::model::CountryRecord;
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Capital,
    Region,
    Population,
    /// Any other raw attribute, compared as a string.
    Attribute(String),
}

impl SortField {
    pub fn parse(field: &str) -> Self {
        match field {
            "name" => SortField::Name,
            "capital" => SortField::Capital,
            "region" => SortField::Region,
            "population" => SortField::Population,
            other => SortField::Attribute(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortField::Name => "name",
            SortField::Capital => "capital",
            SortField::Region => "region",
            SortField::Population => "population",
            SortField::Attribute(name) => name,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortField {
    fn from(field: &str) -> Self {
        SortField::parse(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// `↑` / `↓` header marker.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The active sort of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Next sort after the user picks `field`, given the current one.
    ///
    /// Picking the active field flips its direction; any other field starts
    /// ascending.
    pub fn toggled(current: Option<&SortState>, field: SortField) -> SortState {
        match current {
            Some(active) if active.field == field => {
                SortState::new(field, active.direction.flipped())
            }
            _ => SortState::new(field, SortDirection::Ascending),
        }
    }
}

/// Case-folded string key; `None` orders after every `Some`.
fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => fold_key(a).cmp(&fold_key(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending comparison of two records on `field`.
pub fn compare(a: &CountryRecord, b: &CountryRecord, field: &SortField) -> Ordering {
    match field {
        SortField::Name => compare_text(Some(a.name()), Some(b.name())),
        SortField::Capital => compare_text(a.capital(), b.capital()),
        SortField::Region => compare_text(a.region(), b.region()),
        SortField::Population => a.population_for_sort().cmp(&b.population_for_sort()),
        SortField::Attribute(name) => {
            compare_text(a.attribute(name).as_deref(), b.attribute(name).as_deref())
        }
    }
}

/// Returns `items` ordered by `field` and `direction`.
pub fn sort<T>(mut items: Vec<T>, field: &SortField, direction: SortDirection) -> Vec<T>
where
    T: AsRef<CountryRecord>,
{
    items.sort_by(|a, b| {
        let ord = compare(a.as_ref(), b.as_ref(), field);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_countries;

    fn names(records: &[CountryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn toggling_flips_only_the_active_field() {
        let first = SortState::toggled(None, SortField::Name);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortState::toggled(Some(&first), SortField::Name);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortState::toggled(Some(&second), SortField::Name);
        assert_eq!(third.direction, SortDirection::Ascending);

        let other = SortState::toggled(Some(&second), SortField::Population);
        assert_eq!(other, SortState::new(SortField::Population, SortDirection::Ascending));
    }

    #[test]
    fn parse_maps_known_fields() {
        assert_eq!(SortField::parse("population"), SortField::Population);
        assert_eq!(
            SortField::parse("flags"),
            SortField::Attribute("flags".into())
        );
        assert_eq!(SortField::parse("Name"), SortField::Attribute("Name".into()));
    }

    #[test]
    fn population_descending() {
        let sorted = sort(
            sample_countries(),
            &SortField::Population,
            SortDirection::Descending,
        );
        assert_eq!(
            names(&sorted)[..3],
            ["India", "United States", "Indonesia"]
        );
        assert_eq!(names(&sorted)[9], "Australia");
    }

    #[test]
    fn names_compare_case_insensitively() {
        let mut sample = sample_countries();
        sample[0].common_name = "egypt".into();
        let sorted = sort(sample, &SortField::Name, SortDirection::Ascending);
        let pos_lower = sorted.iter().position(|r| r.name() == "egypt").unwrap();
        let pos_upper = sorted.iter().position(|r| r.name() == "Egypt").unwrap();
        // Equal folded keys keep input order: "egypt" came first.
        assert_eq!(pos_upper, pos_lower + 1);
        assert_eq!(sorted[0].name(), "Australia");
    }

    #[test]
    fn missing_capitals_sort_last_ascending_and_first_descending() {
        let mut sample = sample_countries();
        sample[3].capital = None;
        let asc = sort(sample.clone(), &SortField::Capital, SortDirection::Ascending);
        assert_eq!(asc.last().unwrap().name(), "Germany");

        let desc = sort(sample, &SortField::Capital, SortDirection::Descending);
        assert_eq!(desc.first().unwrap().name(), "Germany");
    }

    #[test]
    fn missing_population_counts_as_zero() {
        let mut sample = sample_countries();
        sample[5].population = None;
        let asc = sort(sample, &SortField::Population, SortDirection::Ascending);
        assert_eq!(asc[0].name(), "India");
        assert_eq!(asc[1].name(), "Australia");
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let mut sample = sample_countries();
        for record in &mut sample {
            record.population = Some(1);
        }
        let expected: Vec<String> = sample.iter().map(|r| r.common_name.clone()).collect();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort(sample.clone(), &SortField::Population, direction);
            let got: Vec<String> = sorted.iter().map(|r| r.common_name.clone()).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn unknown_field_uses_raw_attribute() {
        let sorted = sort(
            sample_countries(),
            &SortField::parse("cca3"),
            SortDirection::Ascending,
        );
        assert_eq!(sorted[0].cca3.as_deref(), Some("AUS"));

        // No such attribute anywhere: every key is missing, order unchanged.
        let sorted = sort(
            sample_countries(),
            &SortField::parse("nope"),
            SortDirection::Ascending,
        );
        assert_eq!(sorted, sample_countries());
    }
}
