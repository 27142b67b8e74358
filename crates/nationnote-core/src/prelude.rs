//! nationnote prelude: bring common types and traits into scope for demos.

pub use crate::error::{DirectoryError, Result};
pub use crate::config::DirectoryConfig;
pub use crate::favorites::{FavoriteEntry, FavoritesStore};
pub use crate::model::{CountryDraft, CountryRecord, IdentityKey};
pub use crate::paginate::{paginate, PageMarker};
pub use crate::query::{filter, FilterCriteria, KNOWN_REGIONS};
pub use crate::sample::sample_countries;
pub use crate::session::{Applied, Directory, Snapshot, ViewState};
pub use crate::sort::{sort, SortDirection, SortField, SortState};
pub use crate::source::{Loaded, Origin, Transport};
#[cfg(feature = "http")]
pub use crate::source::HttpTransport;
pub use crate::traits::{NameMatch, RegionMatch};
