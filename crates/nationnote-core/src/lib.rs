// crates/nationnote-core/src/lib.rs

//! Country directory engine.
//!
//! Loads country records from a remote service (or a built-in sample set when
//! the service is unreachable) and serves filtered, sorted, paginated views
//! with a favorites side collection. Start with [`Directory`].

pub mod common;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod paginate;
pub mod prelude;
pub mod query;
pub mod sample;
pub mod session;
pub mod sort;
pub mod source; // Remote loading + Transport seam
pub mod text;
pub mod traits;
// Wire format, only read by source
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{DirectoryError, Result};
pub use crate::common::DirectoryStats;
pub use crate::config::DirectoryConfig;
pub use crate::favorites::{FavoriteEntry, FavoritesStore};
pub use crate::model::{CountryDraft, CountryRecord, Currency, IdentityKey};
pub use crate::paginate::{Page, PageMarker};
pub use crate::query::FilterCriteria;
pub use crate::session::{Applied, Directory, FetchTicket, PageItem, Snapshot, ViewState};
pub use crate::sort::{SortDirection, SortField, SortState};
pub use crate::source::{CountrySource, HttpReply, Loaded, Origin, Transport};
#[cfg(feature = "http")]
pub use crate::source::HttpTransport;
