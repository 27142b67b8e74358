// crates/nationnote-core/src/error.rs

//! Error types for the country directory engine.
//!
//! No error here is fatal: every failing command leaves the collection, the
//! view state and the favorites exactly as they were.

use crate::model::IdentityKey;
use thiserror::Error;

/// All errors surfaced by the engine and the data source adapter.
#[derive(Debug, Error)]
pub enum DirectoryError {
    // Remote collaborator
    #[error("country source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("no countries found: {0}")]
    NotFound(String),

    #[error("malformed response from country source: {0}")]
    MalformedResponse(String),

    // Domain rules
    #[error("{0} is already in favorites")]
    AlreadyFavorited(IdentityKey),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown country: {0}")]
    UnknownRecord(IdentityKey),

    #[error("{0} was fetched from the source and cannot be deleted")]
    ReadOnlyRecord(IdentityKey),

    #[error("page {requested} is out of range (1..={total})")]
    PageOutOfRange { requested: usize, total: usize },

    // Setup
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl DirectoryError {
    /// True for the conditions that the full load recovers from by
    /// substituting the built-in sample set.
    pub fn is_degradable(&self) -> bool {
        matches!(
            self,
            DirectoryError::SourceUnavailable(_) | DirectoryError::MalformedResponse(_)
        )
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
