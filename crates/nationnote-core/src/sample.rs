// crates/nationnote-core/src/sample.rs

//! Built-in sample set used in degraded mode.
//!
//! This is the single table every fallback path reads from. The values
//! mirror what the remote service returns for the same countries.

use crate::model::{CountryRecord, Currency};
use once_cell::sync::Lazy;

struct SampleRow {
    common: &'static str,
    official: &'static str,
    capital: &'static str,
    region: &'static str,
    subregion: &'static str,
    population: u64,
    cca2: &'static str,
    cca3: &'static str,
    /// (code, name, symbol)
    currency: (&'static str, &'static str, &'static str),
    languages: &'static [(&'static str, &'static str)],
    timezones: &'static [&'static str],
    demonym: &'static str,
    phone_code: &'static str,
}

const SAMPLE_ROWS: [SampleRow; 10] = [
    SampleRow {
        common: "Indonesia",
        official: "Republic of Indonesia",
        capital: "Jakarta",
        region: "Asia",
        subregion: "South-Eastern Asia",
        population: 273_523_621,
        cca2: "ID",
        cca3: "IDN",
        currency: ("IDR", "Indonesian rupiah", "Rp"),
        languages: &[("ind", "Indonesian")],
        timezones: &["UTC+07:00", "UTC+08:00", "UTC+09:00"],
        demonym: "Indonesian",
        phone_code: "+62",
    },
    SampleRow {
        common: "Japan",
        official: "Japan",
        capital: "Tokyo",
        region: "Asia",
        subregion: "Eastern Asia",
        population: 125_836_021,
        cca2: "JP",
        cca3: "JPN",
        currency: ("JPY", "Japanese yen", "¥"),
        languages: &[("jpn", "Japanese")],
        timezones: &["UTC+09:00"],
        demonym: "Japanese",
        phone_code: "+81",
    },
    SampleRow {
        common: "United States",
        official: "United States of America",
        capital: "Washington D.C.",
        region: "Americas",
        subregion: "North America",
        population: 329_484_123,
        cca2: "US",
        cca3: "USA",
        currency: ("USD", "United States dollar", "$"),
        languages: &[("eng", "English")],
        timezones: &["UTC-05:00", "UTC-06:00", "UTC-07:00", "UTC-08:00"],
        demonym: "American",
        phone_code: "+1",
    },
    SampleRow {
        common: "Germany",
        official: "Federal Republic of Germany",
        capital: "Berlin",
        region: "Europe",
        subregion: "Western Europe",
        population: 83_240_525,
        cca2: "DE",
        cca3: "DEU",
        currency: ("EUR", "Euro", "€"),
        languages: &[("deu", "German")],
        timezones: &["UTC+01:00"],
        demonym: "German",
        phone_code: "+49",
    },
    SampleRow {
        common: "Brazil",
        official: "Federative Republic of Brazil",
        capital: "Brasília",
        region: "Americas",
        subregion: "South America",
        population: 212_559_409,
        cca2: "BR",
        cca3: "BRA",
        currency: ("BRL", "Brazilian real", "R$"),
        languages: &[("por", "Portuguese")],
        timezones: &["UTC-05:00", "UTC-04:00", "UTC-03:00", "UTC-02:00"],
        demonym: "Brazilian",
        phone_code: "+55",
    },
    SampleRow {
        common: "India",
        official: "Republic of India",
        capital: "New Delhi",
        region: "Asia",
        subregion: "Southern Asia",
        population: 1_380_004_385,
        cca2: "IN",
        cca3: "IND",
        currency: ("INR", "Indian rupee", "₹"),
        languages: &[("eng", "English"), ("hin", "Hindi")],
        timezones: &["UTC+05:30"],
        demonym: "Indian",
        phone_code: "+91",
    },
    SampleRow {
        common: "Nigeria",
        official: "Federal Republic of Nigeria",
        capital: "Abuja",
        region: "Africa",
        subregion: "Western Africa",
        population: 206_139_587,
        cca2: "NG",
        cca3: "NGA",
        currency: ("NGN", "Nigerian naira", "₦"),
        languages: &[("eng", "English")],
        timezones: &["UTC+01:00"],
        demonym: "Nigerian",
        phone_code: "+234",
    },
    SampleRow {
        common: "Australia",
        official: "Commonwealth of Australia",
        capital: "Canberra",
        region: "Oceania",
        subregion: "Australia and New Zealand",
        population: 25_687_041,
        cca2: "AU",
        cca3: "AUS",
        currency: ("AUD", "Australian dollar", "$"),
        languages: &[("eng", "English")],
        timezones: &["UTC+08:00", "UTC+09:30", "UTC+10:00"],
        demonym: "Australian",
        phone_code: "+61",
    },
    SampleRow {
        common: "France",
        official: "French Republic",
        capital: "Paris",
        region: "Europe",
        subregion: "Western Europe",
        population: 67_391_582,
        cca2: "FR",
        cca3: "FRA",
        currency: ("EUR", "Euro", "€"),
        languages: &[("fra", "French")],
        timezones: &["UTC+01:00"],
        demonym: "French",
        phone_code: "+33",
    },
    SampleRow {
        common: "Egypt",
        official: "Arab Republic of Egypt",
        capital: "Cairo",
        region: "Africa",
        subregion: "Northern Africa",
        population: 102_334_403,
        cca2: "EG",
        cca3: "EGY",
        currency: ("EGP", "Egyptian pound", "£"),
        languages: &[("ara", "Arabic")],
        timezones: &["UTC+02:00"],
        demonym: "Egyptian",
        phone_code: "+20",
    },
];

static SAMPLE_COUNTRIES: Lazy<Vec<CountryRecord>> =
    Lazy::new(|| SAMPLE_ROWS.iter().map(SampleRow::to_record).collect());

impl SampleRow {
    fn to_record(&self) -> CountryRecord {
        let (code, name, symbol) = self.currency;
        CountryRecord {
            common_name: self.common.to_string(),
            official_name: Some(self.official.to_string()),
            capital: Some(self.capital.to_string()),
            region: Some(self.region.to_string()),
            subregion: Some(self.subregion.to_string()),
            population: Some(self.population),
            flag_image_url: format!(
                "https://flagcdn.com/w320/{}.png",
                self.cca2.to_ascii_lowercase()
            ),
            languages: self
                .languages
                .iter()
                .map(|(c, l)| (c.to_string(), l.to_string()))
                .collect(),
            currencies: [(
                code.to_string(),
                Currency {
                    name: Some(name.to_string()),
                    symbol: Some(symbol.to_string()),
                },
            )]
            .into_iter()
            .collect(),
            timezones: self.timezones.iter().map(|tz| tz.to_string()).collect(),
            cca2: Some(self.cca2.to_string()),
            cca3: Some(self.cca3.to_string()),
            independent: Some(true),
            demonym: Some(self.demonym.to_string()),
            phone_code: Some(self.phone_code.to_string()),
            is_user_created: false,
            local_id: None,
        }
    }
}

/// A fresh copy of the ten built-in sample countries.
pub fn sample_countries() -> Vec<CountryRecord> {
    SAMPLE_COUNTRIES.clone()
}
