// crates/nationnote-core/src/model.rs

//! # Country Record Model
//!
//! [`CountryRecord`] is the normalized, owned shape of one country. Records
//! enter the engine in one of two ways:
//!
//! - **Fetched**: built from the wire format by [`CountryRecord::from_raw`],
//!   which trims strings, drops empty values and picks the first capital and
//!   the best flag URL. Absence is explicit (`Option`) from here on.
//! - **User-created**: built from a [`CountryDraft`] by
//!   [`CountryRecord::from_draft`]. These carry a generated `local_id`.
//!
//! ## Identity
//!
//! Every lookup goes through [`CountryRecord::identity_key`]: the `local_id`
//! when present, otherwise the common name. Editing a user-created record
//! therefore never orphans it under a changed name.

use crate::error::{DirectoryError, Result};
use crate::raw::CountryRaw;
use crate::text::{format_grouped, join_or_unknown, non_blank, UNKNOWN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Shown when a record has no flag image.
pub const PLACEHOLDER_FLAG_URL: &str = "https://placehold.co/64x40?text=Flag";

/// The stable key used by favorites, edit and delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdentityKey {
    /// Generated id of a user-created record.
    Local(String),
    /// Common name of a fetched record.
    Name(String),
}

impl IdentityKey {
    pub fn as_str(&self) -> &str {
        match self {
            IdentityKey::Local(id) | IdentityKey::Name(id) => id,
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IdentityKey {
    fn from(name: &str) -> Self {
        IdentityKey::Name(name.to_string())
    }
}

impl From<String> for IdentityKey {
    fn from(name: String) -> Self {
        IdentityKey::Name(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// A country entry in the canonical collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: Option<String>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    /// `None` is "unknown", never zero.
    pub population: Option<u64>,
    pub flag_image_url: String,

    /// code -> name, e.g. `"jpn" -> "Japanese"`
    pub languages: BTreeMap<String, String>,
    /// code -> currency, e.g. `"JPY" -> Japanese yen (¥)`
    pub currencies: BTreeMap<String, Currency>,
    pub timezones: Vec<String>,

    pub cca2: Option<String>,
    pub cca3: Option<String>,
    pub independent: Option<bool>,
    pub demonym: Option<String>,
    pub phone_code: Option<String>,

    pub is_user_created: bool,
    pub local_id: Option<String>,
}

impl CountryRecord {
    /// Normalizes one wire entry. Returns `None` when the entry has no
    /// usable common name, since such a record cannot be addressed.
    pub fn from_raw(raw: CountryRaw) -> Option<Self> {
        let name = raw.name.unwrap_or_default();
        let common_name = non_blank(name.common.as_deref())?;

        let flags = raw.flags.unwrap_or_default();
        let flag_image_url = non_blank(flags.png.as_deref())
            .or_else(|| non_blank(flags.svg.as_deref()))
            .unwrap_or_else(|| PLACEHOLDER_FLAG_URL.to_string());

        let languages = raw
            .languages
            .into_iter()
            .filter_map(|(code, lang)| non_blank(Some(lang.as_str())).map(|l| (code, l)))
            .collect();

        let currencies = raw
            .currencies
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    Currency {
                        name: non_blank(c.name.as_deref()),
                        symbol: non_blank(c.symbol.as_deref()),
                    },
                )
            })
            .collect();

        let demonym = raw
            .demonyms
            .get("eng")
            .and_then(|d| non_blank(d.m.as_deref()).or_else(|| non_blank(d.f.as_deref())));

        let phone_code = raw.idd.and_then(|idd| {
            let root = non_blank(idd.root.as_deref())?;
            // Single-suffix codes are the full prefix (+81); multi-suffix
            // ones (+1 201, +1 202, ...) only share the root.
            match idd.suffixes.as_slice() {
                [only] => Some(format!("{root}{}", only.trim())),
                _ => Some(root),
            }
        });

        Some(Self {
            common_name,
            official_name: non_blank(name.official.as_deref()),
            capital: raw.capital.first().and_then(|c| non_blank(Some(c.as_str()))),
            region: non_blank(raw.region.as_deref()),
            subregion: non_blank(raw.subregion.as_deref()),
            population: raw.population,
            flag_image_url,
            languages,
            currencies,
            timezones: raw
                .timezones
                .iter()
                .filter_map(|tz| non_blank(Some(tz.as_str())))
                .collect(),
            cca2: non_blank(raw.cca2.as_deref()),
            cca3: non_blank(raw.cca3.as_deref()),
            independent: raw.independent,
            demonym,
            phone_code,
            is_user_created: false,
            local_id: None,
        })
    }

    /// Builds a user-created record with a fresh local id.
    pub fn from_draft(draft: CountryDraft) -> Result<Self> {
        let mut record = Self {
            common_name: String::new(),
            official_name: None,
            capital: None,
            region: None,
            subregion: None,
            population: None,
            flag_image_url: PLACEHOLDER_FLAG_URL.to_string(),
            languages: BTreeMap::new(),
            currencies: BTreeMap::new(),
            timezones: Vec::new(),
            cca2: None,
            cca3: None,
            independent: None,
            demonym: None,
            phone_code: None,
            is_user_created: true,
            local_id: Some(Uuid::new_v4().to_string()),
        };
        record.apply_draft(draft)?;
        Ok(record)
    }

    /// Overwrites the editable fields. Leaves the record untouched when the
    /// draft is invalid.
    pub fn apply_draft(&mut self, draft: CountryDraft) -> Result<()> {
        let common_name = draft.validated_name()?;
        self.common_name = common_name;
        self.official_name = non_blank(draft.official_name.as_deref());
        self.capital = non_blank(draft.capital.as_deref());
        self.region = non_blank(draft.region.as_deref());
        self.subregion = non_blank(draft.subregion.as_deref());
        self.population = draft.population;
        self.flag_image_url = non_blank(draft.flag_image_url.as_deref())
            .unwrap_or_else(|| PLACEHOLDER_FLAG_URL.to_string());
        Ok(())
    }

    pub fn identity_key(&self) -> IdentityKey {
        match &self.local_id {
            Some(id) => IdentityKey::Local(id.clone()),
            None => IdentityKey::Name(self.common_name.clone()),
        }
    }

    pub fn has_identity(&self, key: &IdentityKey) -> bool {
        match (key, &self.local_id) {
            (IdentityKey::Local(id), Some(local)) => id == local,
            (IdentityKey::Name(name), None) => *name == self.common_name,
            _ => false,
        }
    }

    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Population for ordering: unknown counts as zero.
    pub fn population_for_sort(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    /// Raw attribute lookup by wire name, used by the generic sort fallback.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "name" | "commonName" => Some(self.common_name.clone()),
            "officialName" => self.official_name.clone(),
            "capital" => self.capital.clone(),
            "region" => self.region.clone(),
            "subregion" => self.subregion.clone(),
            "population" => self.population.map(|p| p.to_string()),
            "flags" | "flag" | "flagImageUrl" => Some(self.flag_image_url.clone()),
            "cca2" => self.cca2.clone(),
            "cca3" => self.cca3.clone(),
            "demonym" => self.demonym.clone(),
            "phoneCode" | "idd" => self.phone_code.clone(),
            _ => None,
        }
    }

    // --- Display helpers ---

    pub fn population_display(&self, separator: char) -> String {
        self.population
            .map(|p| format_grouped(p, separator))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn capital_display(&self) -> &str {
        self.capital.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn region_display(&self) -> &str {
        self.region.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn languages_display(&self) -> String {
        join_or_unknown(self.languages.values())
    }

    /// `"Japanese yen (¥)"`, one entry per currency.
    pub fn currencies_display(&self) -> String {
        join_or_unknown(self.currencies.iter().map(|(code, c)| {
            let name = c.name.as_deref().unwrap_or(code);
            match &c.symbol {
                Some(symbol) => format!("{name} ({symbol})"),
                None => name.to_string(),
            }
        }))
    }

    pub fn timezones_display(&self) -> String {
        join_or_unknown(&self.timezones)
    }

    pub fn independence_display(&self) -> &str {
        match self.independent {
            Some(true) => "Independent",
            Some(false) => "Not independent",
            None => UNKNOWN,
        }
    }
}

impl AsRef<CountryRecord> for CountryRecord {
    fn as_ref(&self) -> &CountryRecord {
        self
    }
}

/// Payload of the create and edit forms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDraft {
    pub common_name: String,
    pub official_name: Option<String>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub flag_image_url: Option<String>,
}

impl CountryDraft {
    pub fn named(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            ..Self::default()
        }
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital = Some(capital.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    fn validated_name(&self) -> Result<String> {
        non_blank(Some(self.common_name.as_str()))
            .ok_or_else(|| DirectoryError::Validation("common name is required".into()))
    }
}

impl From<&CountryRecord> for CountryDraft {
    /// Prefills an edit form.
    fn from(record: &CountryRecord) -> Self {
        Self {
            common_name: record.common_name.clone(),
            official_name: record.official_name.clone(),
            capital: record.capital.clone(),
            region: record.region.clone(),
            subregion: record.subregion.clone(),
            population: record.population,
            flag_image_url: Some(record.flag_image_url.clone()),
        }
    }
}
