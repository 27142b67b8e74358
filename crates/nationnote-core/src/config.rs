// crates/nationnote-core/src/config.rs

//! # Engine Configuration
//!
//! Plain values only: the engine reads no environment variables and no files.
//! Construct a [`DirectoryConfig`] with `Default` and adjust it with the
//! `with_*` setters.

use crate::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// id-ID groups thousands with a dot (`1.380.004.385`).
pub const DEFAULT_THOUSANDS_SEPARATOR: char = '.';
/// The list-all endpoint rejects projections with more than ten fields.
pub const MAX_LIST_FIELDS: usize = 10;

/// The fields the engine reads from the list-all endpoint.
///
/// The cap leaves out `idd`, `demonyms`, `cca2` and `independent`, so a full
/// load leaves phone code, demonym, alpha-2 code and independence unknown.
/// Name and region lookups return complete records and fill them in.
pub const DEFAULT_LIST_FIELDS: [&str; MAX_LIST_FIELDS] = [
    "name",
    "capital",
    "region",
    "subregion",
    "population",
    "flags",
    "languages",
    "currencies",
    "timezones",
    "cca3",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Root of the remote country service, without a trailing slash.
    pub base_url: String,
    /// Records per page in the browse view.
    pub page_size: usize,
    /// `None` leaves timeouts to the collaborator.
    pub request_timeout: Option<Duration>,
    pub thousands_separator: char,
    /// Projection sent as `?fields=` with the list-all request.
    pub list_fields: Vec<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            list_fields: DEFAULT_LIST_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl DirectoryConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    pub fn with_list_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the values the engine cannot work around.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(DirectoryError::InvalidConfig(
                "page_size must be at least 1".into(),
            ));
        }
        if self.list_fields.len() > MAX_LIST_FIELDS {
            return Err(DirectoryError::InvalidConfig(format!(
                "at most {MAX_LIST_FIELDS} list fields are accepted, got {}",
                self.list_fields.len()
            )));
        }
        self.parsed_base_url().map(|_| ())
    }

    /// The base URL as a [`Url`], ready for segment pushes.
    pub(crate) fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim_end_matches('/'))?;
        if url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidConfig(format!(
                "base_url cannot be a base: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}
