// crates/nationnote-core/src/raw.rs

//! Raw country structure as it comes from the remote JSON.
//!
//! Every field is optional on the wire; normalization into
//! [`CountryRecord`](crate::model::CountryRecord) happens in
//! [`CountryRecord::from_raw`](crate::model::CountryRecord::from_raw).
//! We do *not* expose these types outside the ingestion path.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `{ "common": "Japan", "official": "Japan" }`
#[derive(Debug, Default, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: Option<String>,
    #[serde(default)]
    pub official: Option<String>,
}

/// `{ "png": "...", "svg": "...", "alt": "..." }`
#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// `"JPY": { "name": "Japanese yen", "symbol": "¥" }`
#[derive(Debug, Default, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// International direct dialing: `{ "root": "+8", "suffixes": ["1"] }`
#[derive(Debug, Default, Deserialize)]
pub struct IddRaw {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// `"eng": { "f": "Japanese", "m": "Japanese" }`
#[derive(Debug, Default, Deserialize)]
pub struct DemonymRaw {
    #[serde(default)]
    pub f: Option<String>,
    #[serde(default)]
    pub m: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: Option<NameRaw>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyRaw>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub independent: Option<bool>,
    /// Keyed by language code; we read `eng`.
    #[serde(default)]
    pub demonyms: BTreeMap<String, DemonymRaw>,
    #[serde(default)]
    pub idd: Option<IddRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_wire_shape() {
        let json = r#"{
            "name": { "common": "Japan", "official": "Japan" },
            "capital": ["Tokyo"],
            "region": "Asia",
            "population": 125836021,
            "flags": { "png": "https://flagcdn.com/w320/jp.png" },
            "currencies": { "JPY": { "name": "Japanese yen", "symbol": "¥" } },
            "idd": { "root": "+8", "suffixes": ["1"] },
            "demonyms": { "eng": { "f": "Japanese", "m": "Japanese" } }
        }"#;
        let raw: CountryRaw = serde_json::from_str(json).unwrap();
        assert_eq!(
            raw.name.and_then(|n| n.common).as_deref(),
            Some("Japan")
        );
        assert_eq!(raw.capital, vec!["Tokyo".to_string()]);
        assert_eq!(raw.population, Some(125_836_021));
        assert_eq!(raw.currencies["JPY"].symbol.as_deref(), Some("¥"));
        assert!(raw.timezones.is_empty());
    }

    #[test]
    fn tolerates_missing_everything() {
        let raw: CountryRaw = serde_json::from_str("{}").unwrap();
        assert!(raw.name.is_none());
        assert!(raw.flags.is_none());
        assert!(raw.languages.is_empty());
    }
}
