// crates/nationnote-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Aggregate counts for a [`Directory`](crate::session::Directory).
///
/// Returned by [`Directory::stats`](crate::session::Directory::stats) and
/// computed from the in-memory state at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Records in the canonical collection.
    pub countries: usize,
    /// Of those, records created locally.
    pub user_created: usize,
    /// Records matching the current search and region.
    pub matching: usize,
    pub favorites: usize,
    /// Distinct regions in the canonical collection.
    pub regions: usize,
}
