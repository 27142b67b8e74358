// crates/nationnote-core/src/text.rs

//! Text helpers shared by the query, sort and display code.

/// Sentinel shown wherever a value is unknown.
pub const UNKNOWN: &str = "N/A";

/// Convert a string into a folded key suitable for comparison.
///
/// Case folding only: accents are significant, so `"Åland"` and `"Aland"`
/// stay distinct.
///
/// # Examples
///
/// ```rust
/// use nationnote_core::text::fold_key;
///
/// assert_eq!(fold_key("JaPaN"), "japan");
/// assert_eq!(fold_key("Côte d'Ivoire"), "côte d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test.
///
/// An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_key(haystack).contains(&fold_key(needle))
}

/// Trims a string and maps the empty result to `None`.
///
/// Used at ingestion so that `""` and `"   "` never reach the model as
/// "known" values.
pub fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Formats an integer with a thousands separator.
///
/// # Examples
///
/// ```rust
/// use nationnote_core::text::format_grouped;
///
/// assert_eq!(format_grouped(1_380_004_385, '.'), "1.380.004.385");
/// assert_eq!(format_grouped(999, ','), "999");
/// ```
pub fn format_grouped(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Joins the parts with `", "`, or returns [`UNKNOWN`] when there are none.
pub fn join_or_unknown<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = parts
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        UNKNOWN.to_string()
    } else {
        joined
    }
}
