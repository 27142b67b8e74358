// crates/nationnote-core/src/traits.rs
use crate::model::CountryRecord;
use crate::text::{contains_folded, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// This trait centralizes case-insensitive comparisons based on [`fold_key`].
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`]: equality on folded form
/// - [`NameMatch::name_contains`]: substring match on folded form
///
/// # Examples
/// ```rust
/// use nationnote_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Japan").is_named("JAPAN"));
/// assert!(Place("Japan").name_contains("jap"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Case-insensitive substring match. An empty `q` matches.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}

impl NameMatch for CountryRecord {
    fn name_str(&self) -> &str {
        &self.common_name
    }
}

/// Region matching is exact and case-sensitive; an empty selection matches
/// every record, including those with no region.
pub trait RegionMatch {
    fn region_str(&self) -> Option<&str>;

    #[inline]
    fn in_region(&self, region: &str) -> bool {
        region.is_empty() || self.region_str() == Some(region)
    }
}

impl RegionMatch for CountryRecord {
    fn region_str(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
