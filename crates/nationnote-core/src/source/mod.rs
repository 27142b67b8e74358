// crates/nationnote-core/src/source/mod.rs

//! # Data Source Adapter
//!
//! Fetches country lists from the remote country service and normalizes
//! them into [`CountryRecord`]s.
//!
//! The HTTP client sits behind the [`Transport`] trait. Production code uses
//! [`HttpTransport`] (feature `http`, on by default); tests plug in a canned
//! implementation.
//!
//! ## Failure policy
//!
//! | call               | transport error     | non-2xx      | not a JSON array    |
//! |--------------------|---------------------|--------------|---------------------|
//! | [`load_all`]       | sample set          | sample set   | sample set          |
//! | [`load_by_name`]   | `SourceUnavailable` | `NotFound`   | `MalformedResponse` |
//! | [`load_by_region`] | `SourceUnavailable` | `NotFound`   | `MalformedResponse` |
//!
//! [`load_all`] does not fail because of the service: an outage, an error
//! status, or an empty or unusable list is replaced by the built-in sample
//! set and reported through [`Origin::Sample`]. Entries
//! that do not deserialize, or have no common name, are skipped one by one.
//!
//! [`load_all`]: CountrySource::load_all
//! [`load_by_name`]: CountrySource::load_by_name
//! [`load_by_region`]: CountrySource::load_by_region

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpTransport;

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::model::CountryRecord;
use crate::raw::CountryRaw;
use crate::sample::sample_countries;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

/// Status and body of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam to the remote collaborator.
///
/// Implementations return `Err(SourceUnavailable)` when no reply arrived at
/// all. Any reply, whatever its status, is `Ok`.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpReply>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<HttpReply> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &Url) -> Result<HttpReply> {
        (**self).get(url)
    }
}

/// Where a full load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    /// The built-in sample set, substituted after a failed load.
    Sample,
}

/// Result of [`CountrySource::load_all`].
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub records: Vec<CountryRecord>,
    pub origin: Origin,
}

impl Loaded {
    pub fn sample() -> Self {
        Self {
            records: sample_countries(),
            origin: Origin::Sample,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.origin == Origin::Sample
    }
}

/// Builds endpoint URLs and turns replies into records.
///
/// Holds no state between calls beyond its configuration.
#[derive(Debug, Clone)]
pub struct CountrySource<T> {
    base_url: Url,
    list_fields: Vec<String>,
    transport: T,
}

impl<T: Transport> CountrySource<T> {
    pub fn new(config: &DirectoryConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base_url: config.parsed_base_url()?,
            list_fields: config.list_fields.clone(),
            transport,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Loads every country, substituting the sample set when the service is
    /// unreachable or its reply is unusable.
    ///
    /// Only errors that are not [degradable](DirectoryError::is_degradable),
    /// such as a transport rejecting the request itself, are returned.
    pub fn load_all(&self) -> Result<Loaded> {
        match self.fetch_all() {
            Ok(records) if !records.is_empty() => {
                info!(count = records.len(), "loaded countries from source");
                Ok(Loaded {
                    records,
                    origin: Origin::Remote,
                })
            }
            Ok(_) => {
                warn!("source returned no usable countries; using sample set");
                Ok(Loaded::sample())
            }
            Err(err) if err.is_degradable() => {
                warn!(error = %err, "full load failed; using sample set");
                Ok(Loaded::sample())
            }
            Err(err) => Err(err),
        }
    }

    /// Countries whose name matches `term`, as decided by the remote service.
    pub fn load_by_name(&self, term: &str) -> Result<Vec<CountryRecord>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DirectoryError::Validation("search term is empty".into()));
        }
        self.fetch_scoped(&["name", term], term)
    }

    /// Countries of one region, e.g. `"Europe"`.
    pub fn load_by_region(&self, region: &str) -> Result<Vec<CountryRecord>> {
        let region = region.trim();
        if region.is_empty() {
            return Err(DirectoryError::Validation("region is empty".into()));
        }
        self.fetch_scoped(&["region", region], region)
    }

    /// `{base}/all?fields=...`
    pub fn all_url(&self) -> Result<Url> {
        let mut url = self.endpoint(&["all"])?;
        if !self.list_fields.is_empty() {
            url.query_pairs_mut()
                .append_pair("fields", &self.list_fields.join(","));
        }
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DirectoryError::InvalidConfig(format!("base_url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn fetch_all(&self) -> Result<Vec<CountryRecord>> {
        let url = self.all_url()?;
        debug!(%url, "requesting all countries");
        let reply = self.transport.get(&url)?;
        if !reply.is_success() {
            return Err(DirectoryError::SourceUnavailable(format!(
                "HTTP {} from {url}",
                reply.status
            )));
        }
        parse_records(&reply.body)
    }

    fn fetch_scoped(&self, segments: &[&str], term: &str) -> Result<Vec<CountryRecord>> {
        let url = self.endpoint(segments)?;
        debug!(%url, "requesting countries");
        let reply = self.transport.get(&url)?;
        if !reply.is_success() {
            debug!(status = reply.status, term, "source found no countries");
            return Err(DirectoryError::NotFound(term.to_string()));
        }
        let records = parse_records(&reply.body)?;
        if records.is_empty() {
            return Err(DirectoryError::NotFound(term.to_string()));
        }
        Ok(records)
    }
}

/// Parses a reply body into records.
///
/// The body must be a JSON array. Elements that fail to deserialize or have
/// no common name are skipped with a warning.
pub fn parse_records(body: &str) -> Result<Vec<CountryRecord>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DirectoryError::MalformedResponse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(DirectoryError::MalformedResponse(format!(
            "expected a JSON array, got {}",
            kind_of(&value)
        )));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<CountryRaw>(item) {
            Ok(raw) => match CountryRecord::from_raw(raw) {
                Some(record) => records.push(record),
                None => warn!(index, "skipping country without a common name"),
            },
            Err(err) => warn!(index, error = %err, "skipping malformed country"),
        }
    }
    Ok(records)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Replies with a fixed result and records every requested URL.
    struct Canned {
        reply: Option<HttpReply>,
        seen: RefCell<Vec<String>>,
    }

    impl Canned {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                reply: Some(HttpReply::new(status, body)),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                reply: None,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        fn get(&self, url: &Url) -> Result<HttpReply> {
            self.seen.borrow_mut().push(url.to_string());
            self.reply
                .clone()
                .ok_or_else(|| DirectoryError::SourceUnavailable("connection refused".into()))
        }
    }

    fn source(transport: Canned) -> CountrySource<Canned> {
        CountrySource::new(&DirectoryConfig::default(), transport).unwrap()
    }

    const TWO_COUNTRIES: &str = r#"[
        {"name": {"common": "Japan", "official": "Japan"}, "capital": ["Tokyo"],
         "region": "Asia", "population": 125836021,
         "flags": {"png": "https://flagcdn.com/w320/jp.png"}},
        {"name": {"common": "Peru"}, "region": "Americas"}
    ]"#;

    #[test]
    fn load_all_uses_remote_records() {
        let loaded = source(Canned::ok(200, TWO_COUNTRIES)).load_all().unwrap();
        assert_eq!(loaded.origin, Origin::Remote);
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[0].capital(), Some("Tokyo"));
        assert!(loaded.records[1].capital.is_none());
    }

    #[test]
    fn load_all_requests_projection() {
        let src = source(Canned::ok(200, TWO_COUNTRIES));
        src.load_all().unwrap();
        let seen = src.transport().seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("https://restcountries.com/v3.1/all?fields=name%2Ccapital"));
    }

    #[test]
    fn load_all_falls_back_on_every_failure() {
        for transport in [
            Canned::offline(),
            Canned::ok(500, "oops"),
            Canned::ok(200, r#"{"status": 404}"#),
            Canned::ok(200, "not json"),
            Canned::ok(200, "[]"),
            Canned::ok(200, r#"[{"name": {"common": "  "}}, 42]"#),
        ] {
            let loaded = source(transport).load_all().unwrap();
            assert!(loaded.is_degraded());
            assert_eq!(loaded.records, sample_countries());
        }
    }

    struct Rejecting;

    impl Transport for Rejecting {
        fn get(&self, _url: &Url) -> Result<HttpReply> {
            Err(DirectoryError::InvalidConfig("proxy refused the request".into()))
        }
    }

    #[test]
    fn load_all_surfaces_non_degradable_errors() {
        let src = CountrySource::new(&DirectoryConfig::default(), Rejecting).unwrap();
        assert!(matches!(
            src.load_all(),
            Err(DirectoryError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bad_entries_are_skipped() {
        let body = r#"[{"name": {"common": "Chad"}}, {"population": -5}, "x", {"region": "Asia"}]"#;
        let records = parse_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "Chad");
    }

    #[test]
    fn non_array_payload_is_malformed() {
        assert!(matches!(
            parse_records(r#"{"message": "Not Found"}"#),
            Err(DirectoryError::MalformedResponse(msg)) if msg.contains("an object")
        ));
    }

    #[test]
    fn load_by_name_errors() {
        assert!(matches!(
            source(Canned::ok(404, r#"{"status":404}"#)).load_by_name("xyznoexist"),
            Err(DirectoryError::NotFound(term)) if term == "xyznoexist"
        ));
        assert!(matches!(
            source(Canned::offline()).load_by_name("japan"),
            Err(DirectoryError::SourceUnavailable(_))
        ));
        assert!(matches!(
            source(Canned::ok(200, "{}")).load_by_name("japan"),
            Err(DirectoryError::MalformedResponse(_))
        ));
        assert!(matches!(
            source(Canned::ok(200, TWO_COUNTRIES)).load_by_name("   "),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn scoped_segments_are_encoded() {
        let src = source(Canned::ok(200, TWO_COUNTRIES));
        let records = src.load_by_name(" united states ").unwrap();
        assert_eq!(records.len(), 2);
        src.load_by_region("Europe").unwrap();

        let seen = src.transport().seen.borrow();
        assert_eq!(seen[0], "https://restcountries.com/v3.1/name/united%20states");
        assert_eq!(seen[1], "https://restcountries.com/v3.1/region/Europe");
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let config = DirectoryConfig::default().with_base_url("http://localhost:8080/api/");
        let src = CountrySource::new(&config, Canned::ok(200, "[]")).unwrap();
        assert_eq!(
            src.endpoint(&["name", "a/b"]).unwrap().as_str(),
            "http://localhost:8080/api/name/a%2Fb"
        );
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = DirectoryConfig::default().with_page_size(0);
        assert!(CountrySource::new(&config, Canned::offline()).is_err());
    }
}
