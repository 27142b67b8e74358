// crates/nationnote-core/src/favorites.rs

//! # Favorites Store
//!
//! A keyed side collection of records the user has marked, each with a note.
//!
//! Entries are snapshot copies, not live references: reloading or editing
//! the canonical collection never touches them. A key appears at most once;
//! adding it again is rejected and the existing note is kept.

use crate::error::{DirectoryError, Result};
use crate::model::{CountryRecord, IdentityKey};
use crate::query::{self, FilterCriteria};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub record: CountryRecord,
    /// May be empty, never absent.
    pub note: String,
}

impl FavoriteEntry {
    pub fn identity_key(&self) -> IdentityKey {
        self.record.identity_key()
    }
}

impl AsRef<CountryRecord> for FavoriteEntry {
    fn as_ref(&self) -> &CountryRecord {
        &self.record
    }
}

/// Favorites in insertion order.
///
/// Linear scans are fine here: a user favorites a handful of the ~250
/// countries at most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a snapshot of `record`. Fails with `AlreadyFavorited` when its
    /// key is present; the store is unchanged in that case.
    pub fn add(&mut self, record: &CountryRecord, note: impl Into<String>) -> Result<()> {
        let key = record.identity_key();
        if self.is_favorite(&key) {
            return Err(DirectoryError::AlreadyFavorited(key));
        }
        self.entries.push(FavoriteEntry {
            record: record.clone(),
            note: note.into(),
        });
        Ok(())
    }

    /// Removes `key` if present. Removing a non-member is a no-op.
    pub fn remove(&mut self, key: &IdentityKey) {
        self.entries.retain(|e| !e.record.has_identity(key));
    }

    pub fn update_note(&mut self, key: &IdentityKey, note: impl Into<String>) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.record.has_identity(key))
            .ok_or_else(|| DirectoryError::UnknownRecord(key.clone()))?;
        entry.note = note.into();
        Ok(())
    }

    pub fn is_favorite(&self, key: &IdentityKey) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &IdentityKey) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.record.has_identity(key))
    }

    pub fn list(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = IdentityKey> + '_ {
        self.entries.iter().map(FavoriteEntry::identity_key)
    }

    /// Favorites-scoped view through the shared query engine.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<FavoriteEntry> {
        query::filter(&self.entries, criteria)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
