// crates/nationnote-core/src/session.rs

//! # Directory Session
//!
//! [`Directory`] is the one stateful piece of the engine. It owns the
//! canonical collection, the [`ViewState`], the favorites and the loading
//! flags, and it answers every command with a fresh read-only [`Snapshot`].
//!
//! ```text
//! collection ──filter──▶ matches ──sort──▶ ordered ──paginate──▶ page
//!                                                                  │
//! favorites ─────────────────────── is_favorite ───────────────────┘
//! ```
//!
//! ## View rules
//!
//! - Changing the search term or the region resets the page to 1.
//! - Changing the sort keeps the page.
//! - Any collection change (reload, create, edit, delete) resets the page
//!   to 1. Reload also resets search, region and sort.
//!
//! ## Collections
//!
//! A reload supersedes the fetched records only; user-created records stay
//! until they are deleted. A name lookup does not touch the canonical
//! collection: its result is shown in place of it until the lookup is
//! cleared, the region changes, or the collection changes.
//!
//! ## Fetches
//!
//! Network calls are the only suspension points. Each one is tagged with a
//! [`FetchTicket`]; starting a new fetch supersedes every earlier ticket, and
//! completing a superseded ticket is discarded ([`Applied::Stale`]). The
//! blocking [`Directory::reload`] and [`Directory::lookup_by_name`] wrap the
//! `begin_*`/`complete_*` pairs for callers that do not run fetches
//! elsewhere.
//!
//! A failing command leaves the state exactly as it was.

use crate::common::DirectoryStats;
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use crate::favorites::{FavoriteEntry, FavoritesStore};
use crate::model::{CountryDraft, CountryRecord, IdentityKey};
use crate::paginate::{paginate, PageMarker};
use crate::query::{self, FilterCriteria};
use crate::sort::{self, SortField, SortState};
use crate::source::{CountrySource, Loaded, Origin, Transport};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What the presentation layer has selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    /// `""` is "all regions".
    pub region: String,
    /// `None` keeps collection order.
    pub sort: Option<SortState>,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            region: String::new(),
            sort: None,
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            current_page: 1,
            ..self
        }
    }

    pub fn with_region(self, region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            current_page: 1,
            ..self
        }
    }

    /// Applies the flip/reset rule of [`SortState::toggled`]; the page stays.
    pub fn with_sort(self, field: SortField) -> Self {
        let sort = Some(SortState::toggled(self.sort.as_ref(), field));
        Self { sort, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
    }

    pub fn reset() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search_term.clone(), self.region.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchKind {
    Reload,
    Lookup(String),
}

/// Tags one outstanding fetch. Only the most recent ticket can complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket {
    pub token: u64,
    pub kind: FetchKind,
}

/// Outcome of completing a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// A newer fetch had started; the result was dropped.
    Stale,
}

/// One row of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub record: CountryRecord,
    pub is_favorite: bool,
}

/// Everything the presentation layer renders, recomputed after every
/// mutating command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub page_items: Vec<PageItem>,
    pub total_pages: usize,
    pub page_numbers: Vec<PageMarker>,
    pub current_page: usize,
    /// Records matching search and region, over all pages.
    pub total_matches: usize,
    pub loading: bool,
    /// The collection is the built-in sample set.
    pub degraded: bool,
    /// Term of the name lookup being shown, if any.
    pub lookup: Option<String>,
    /// All favorites, ordered by the active sort.
    pub favorites: Vec<FavoriteEntry>,
    pub view: ViewState,
}

impl Snapshot {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn names(&self) -> Vec<&str> {
        self.page_items.iter().map(|item| item.record.name()).collect()
    }
}

/// Result of a name lookup, shown instead of the canonical collection.
#[derive(Debug, Clone)]
struct LookupView {
    term: String,
    records: Vec<CountryRecord>,
}

/// A single browsing session over the country collection.
pub struct Directory<T> {
    config: DirectoryConfig,
    source: CountrySource<T>,
    records: Vec<CountryRecord>,
    lookup: Option<LookupView>,
    view: ViewState,
    favorites: FavoritesStore,
    loading: bool,
    degraded: bool,
    last_token: u64,
    pending: Option<FetchTicket>,
    snapshot: Snapshot,
}

impl<T: Transport> Directory<T> {
    /// An empty session. Call [`Directory::reload`] for the first load.
    pub fn new(config: DirectoryConfig, transport: T) -> Result<Self> {
        let source = CountrySource::new(&config, transport)?;
        let view = ViewState::default();
        let favorites = FavoritesStore::new();
        let snapshot = build_snapshot(&config, &[], None, &view, &favorites, false, false)?;
        Ok(Self {
            config,
            source,
            records: Vec::new(),
            lookup: None,
            view,
            favorites,
            loading: false,
            degraded: false,
            last_token: 0,
            pending: None,
            snapshot,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The canonical collection, regardless of any active lookup.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// The records the view is derived from: the lookup result while one is
    /// shown, otherwise the canonical collection.
    pub fn visible_records(&self) -> &[CountryRecord] {
        match &self.lookup {
            Some(lookup) => &lookup.records,
            None => &self.records,
        }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn source(&self) -> &CountrySource<T> {
        &self.source
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    // ----- view commands -----

    pub fn search(&mut self, term: impl Into<String>) -> Result<&Snapshot> {
        let view = self.view.clone().with_search(term);
        self.commit_view(view)
    }

    /// Also ends an active lookup: the region applies to the full
    /// collection.
    pub fn set_region(&mut self, region: impl Into<String>) -> Result<&Snapshot> {
        let view = self.view.clone().with_region(region);
        let lookup = self.lookup.take();
        if let Err(err) = self.commit_view(view).map(|_| ()) {
            self.lookup = lookup;
            return Err(err);
        }
        if let Some(ended) = lookup {
            debug!(term = %ended.term, "region change ended lookup");
        }
        Ok(&self.snapshot)
    }

    /// Returns from a name lookup to the canonical collection, keeping the
    /// rest of the view. No-op without an active lookup.
    pub fn clear_lookup(&mut self) -> Result<&Snapshot> {
        if self.lookup.is_none() {
            return Ok(&self.snapshot);
        }
        let lookup = self.lookup.take();
        let view = self.view.clone().with_page(1);
        if let Err(err) = self.commit_view(view).map(|_| ()) {
            self.lookup = lookup;
            return Err(err);
        }
        Ok(&self.snapshot)
    }

    pub fn sort_by(&mut self, field: impl Into<SortField>) -> Result<&Snapshot> {
        let view = self.view.clone().with_sort(field.into());
        self.commit_view(view)
    }

    /// Fails with `PageOutOfRange` outside `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) -> Result<&Snapshot> {
        let view = self.view.clone().with_page(page);
        self.commit_view(view)
    }

    /// No-op on the last page.
    pub fn next_page(&mut self) -> Result<&Snapshot> {
        if !self.snapshot.has_next() {
            return Ok(&self.snapshot);
        }
        self.go_to_page(self.view.current_page + 1)
    }

    /// No-op on the first page.
    pub fn previous_page(&mut self) -> Result<&Snapshot> {
        if !self.snapshot.has_previous() {
            return Ok(&self.snapshot);
        }
        self.go_to_page(self.view.current_page - 1)
    }

    // ----- fetches -----

    /// Marks a full reload as started and supersedes any pending fetch.
    pub fn begin_reload(&mut self) -> Result<FetchTicket> {
        self.begin(FetchKind::Reload)
    }

    /// Installs a finished full load, unless `ticket` was superseded.
    ///
    /// The loaded records replace the fetched part of the collection;
    /// user-created records are kept after them.
    pub fn complete_reload(&mut self, ticket: &FetchTicket, loaded: Loaded) -> Result<Applied> {
        if !self.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        let degraded = loaded.origin == Origin::Sample;
        info!(
            count = loaded.records.len(),
            degraded,
            "installing reloaded collection"
        );
        self.install(loaded.records, degraded)?;
        Ok(Applied::Applied)
    }

    /// Drops the outstanding fetch `ticket` without applying anything.
    pub fn cancel_fetch(&mut self, ticket: &FetchTicket) -> Result<Applied> {
        if !self.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        self.pending = None;
        self.loading = false;
        self.refresh()?;
        Ok(Applied::Applied)
    }

    /// Full load through the configured source. An unreachable service
    /// installs the sample set instead of failing.
    pub fn reload(&mut self) -> Result<&Snapshot> {
        let ticket = self.begin_reload()?;
        match self.source.load_all() {
            Ok(loaded) => {
                self.complete_reload(&ticket, loaded)?;
            }
            Err(err) => {
                self.cancel_fetch(&ticket)?;
                return Err(err);
            }
        }
        Ok(&self.snapshot)
    }

    /// Starts a name lookup. A blank term is rejected before anything
    /// changes.
    pub fn begin_lookup(&mut self, term: &str) -> Result<FetchTicket> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DirectoryError::Validation("search term is empty".into()));
        }
        self.begin(FetchKind::Lookup(term.to_string()))
    }

    /// Shows the lookup result in place of the canonical collection, which
    /// is kept for [`Directory::clear_lookup`]. On error, only the loading
    /// flag is cleared and the error is returned.
    pub fn complete_lookup(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<CountryRecord>>,
    ) -> Result<Applied> {
        if !self.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                debug!(error = %err, "lookup failed; keeping view");
                self.cancel_fetch(ticket)?;
                return Err(err);
            }
        };
        let term = match &ticket.kind {
            FetchKind::Lookup(term) => term.clone(),
            FetchKind::Reload => String::new(),
        };
        info!(count = records.len(), term = %term, "showing lookup result");

        let lookup = LookupView { term, records };
        let view = self.view.clone().with_search("");
        let snapshot = build_snapshot(
            &self.config,
            &lookup.records,
            Some(&lookup.term),
            &view,
            &self.favorites,
            false,
            self.degraded,
        )?;
        self.lookup = Some(lookup);
        self.view = view;
        self.loading = false;
        self.pending = None;
        self.snapshot = snapshot;
        Ok(Applied::Applied)
    }

    pub fn lookup_by_name(&mut self, term: &str) -> Result<&Snapshot> {
        let ticket = self.begin_lookup(term)?;
        let result = self.source.load_by_name(term);
        self.complete_lookup(&ticket, result)?;
        Ok(&self.snapshot)
    }

    // ----- collection commands -----
    //
    // These act on the canonical collection and end any active lookup.

    /// Appends a user-created record and returns its key.
    pub fn create_country(&mut self, draft: CountryDraft) -> Result<IdentityKey> {
        let record = CountryRecord::from_draft(draft)?;
        let key = record.identity_key();
        info!(%key, name = record.name(), "created country");
        self.records.push(record);
        self.collection_changed()?;
        Ok(key)
    }

    /// Overwrites the editable fields of `key`.
    ///
    /// A fetched record is keyed by its name, so it cannot be renamed to the
    /// name of another fetched record. Favorites keep their own copy.
    pub fn edit_country(&mut self, key: &IdentityKey, draft: CountryDraft) -> Result<&Snapshot> {
        let index = self.position(key)?;
        if self.records[index].local_id.is_none() {
            let new_key = IdentityKey::Name(draft.common_name.trim().to_string());
            let taken = self
                .records
                .iter()
                .enumerate()
                .any(|(i, other)| i != index && other.has_identity(&new_key));
            if taken {
                return Err(DirectoryError::Validation(format!(
                    "a country named {new_key} already exists"
                )));
            }
        }
        self.records[index].apply_draft(draft)?;
        info!(%key, name = self.records[index].name(), "edited country");
        self.collection_changed()?;
        Ok(&self.snapshot)
    }

    /// Removes a user-created record. Fetched records are read-only and only
    /// go away with the next reload.
    pub fn delete_country(&mut self, key: &IdentityKey) -> Result<&Snapshot> {
        let index = self.position(key)?;
        if !self.records[index].is_user_created {
            return Err(DirectoryError::ReadOnlyRecord(key.clone()));
        }
        let removed = self.records.remove(index);
        info!(%key, name = removed.name(), "deleted country");
        self.collection_changed()?;
        Ok(&self.snapshot)
    }

    /// Looks in the visible records first, then in the canonical collection.
    pub fn get(&self, key: &IdentityKey) -> Option<&CountryRecord> {
        self.visible_records()
            .iter()
            .chain(self.records.iter())
            .find(|r| r.has_identity(key))
    }

    // ----- favorites -----

    /// Favorites a visible or canonical record with `note`.
    pub fn favorite(&mut self, key: &IdentityKey, note: impl Into<String>) -> Result<&Snapshot> {
        let record = self
            .get(key)
            .cloned()
            .ok_or_else(|| DirectoryError::UnknownRecord(key.clone()))?;
        self.favorites.add(&record, note)?;
        info!(%key, "added favorite");
        self.refresh()?;
        Ok(&self.snapshot)
    }

    /// Removing a non-favorite is a no-op.
    pub fn unfavorite(&mut self, key: &IdentityKey) -> Result<&Snapshot> {
        if self.favorites.is_favorite(key) {
            self.favorites.remove(key);
            info!(%key, "removed favorite");
        }
        self.refresh()?;
        Ok(&self.snapshot)
    }

    pub fn update_favorite_note(
        &mut self,
        key: &IdentityKey,
        note: impl Into<String>,
    ) -> Result<&Snapshot> {
        self.favorites.update_note(key, note)?;
        debug!(%key, "updated favorite note");
        self.refresh()?;
        Ok(&self.snapshot)
    }

    /// Favorites matching `criteria`, ordered by the active sort.
    pub fn favorites_view(&self, criteria: &FilterCriteria) -> Vec<FavoriteEntry> {
        sorted_by_view(self.favorites.filtered(criteria), &self.view)
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.records.len(),
            user_created: self.records.iter().filter(|r| r.is_user_created).count(),
            matching: self.snapshot.total_matches,
            favorites: self.favorites.len(),
            regions: query::available_regions(&self.records).len(),
        }
    }

    // ----- internals -----

    fn begin(&mut self, kind: FetchKind) -> Result<FetchTicket> {
        self.last_token += 1;
        let ticket = FetchTicket {
            token: self.last_token,
            kind,
        };
        if let Some(previous) = self.pending.replace(ticket.clone()) {
            debug!(superseded = previous.token, "fetch superseded");
        }
        self.loading = true;
        self.refresh()?;
        Ok(ticket)
    }

    fn is_current(&self, ticket: &FetchTicket) -> bool {
        let current = self.pending.as_ref().map(|p| p.token) == Some(ticket.token);
        if !current {
            debug!(token = ticket.token, "discarding stale fetch result");
        }
        current
    }

    /// Replaces the fetched records, keeps the user-created ones and resets
    /// the view.
    fn install(&mut self, fetched: Vec<CountryRecord>, degraded: bool) -> Result<()> {
        let mut records = fetched;
        records.extend(self.records.iter().filter(|r| r.is_user_created).cloned());
        let view = ViewState::reset();
        let snapshot = build_snapshot(
            &self.config,
            &records,
            None,
            &view,
            &self.favorites,
            false,
            degraded,
        )?;
        self.records = records;
        self.lookup = None;
        self.view = view;
        self.degraded = degraded;
        self.loading = false;
        self.pending = None;
        self.snapshot = snapshot;
        Ok(())
    }

    fn position(&self, key: &IdentityKey) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.has_identity(key))
            .ok_or_else(|| DirectoryError::UnknownRecord(key.clone()))
    }

    fn collection_changed(&mut self) -> Result<()> {
        if let Some(ended) = self.lookup.take() {
            debug!(term = %ended.term, "collection change ended lookup");
        }
        let view = self.view.clone().with_page(1);
        self.commit_view(view).map(|_| ())
    }

    fn refresh(&mut self) -> Result<()> {
        let view = self.view.clone();
        self.commit_view(view).map(|_| ())
    }

    /// Builds the snapshot for `view` and commits both, or neither.
    fn commit_view(&mut self, view: ViewState) -> Result<&Snapshot> {
        let lookup_term = self.lookup.as_ref().map(|l| l.term.as_str());
        let snapshot = build_snapshot(
            &self.config,
            self.visible_records(),
            lookup_term,
            &view,
            &self.favorites,
            self.loading,
            self.degraded,
        )?;
        self.view = view;
        self.snapshot = snapshot;
        Ok(&self.snapshot)
    }
}

#[cfg(feature = "http")]
impl Directory<crate::source::HttpTransport> {
    /// A session backed by the real country service.
    pub fn http(config: DirectoryConfig) -> Result<Self> {
        let transport = crate::source::HttpTransport::new(&config)?;
        Self::new(config, transport)
    }
}

fn sorted_by_view<R: AsRef<CountryRecord>>(items: Vec<R>, view: &ViewState) -> Vec<R> {
    match &view.sort {
        Some(state) => sort::sort(items, &state.field, state.direction),
        None => items,
    }
}

fn build_snapshot(
    config: &DirectoryConfig,
    visible: &[CountryRecord],
    lookup: Option<&str>,
    view: &ViewState,
    favorites: &FavoritesStore,
    loading: bool,
    degraded: bool,
) -> Result<Snapshot> {
    let matches = query::filter(visible, &view.criteria());
    let total_matches = matches.len();
    let ordered = sorted_by_view(matches, view);
    let page = paginate(&ordered, config.page_size, view.current_page)?;

    let page_items = page
        .items
        .into_iter()
        .map(|record| PageItem {
            is_favorite: favorites.is_favorite(&record.identity_key()),
            record,
        })
        .collect();

    Ok(Snapshot {
        page_items,
        total_pages: page.total_pages,
        page_numbers: page.page_numbers,
        current_page: page.current_page,
        total_matches,
        loading,
        degraded,
        lookup: lookup.map(str::to_string),
        favorites: sorted_by_view(favorites.list().to_vec(), view),
        view: view.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_countries;
    use crate::sort::SortDirection;
    use crate::source::HttpReply;
    use url::Url;

    struct Offline;

    impl Transport for Offline {
        fn get(&self, _url: &Url) -> Result<HttpReply> {
            Err(DirectoryError::SourceUnavailable("offline".into()))
        }
    }

    fn loaded(page_size: usize) -> Directory<Offline> {
        let config = DirectoryConfig::default().with_page_size(page_size);
        let mut dir = Directory::new(config, Offline).unwrap();
        dir.reload().unwrap();
        dir
    }

    #[test]
    fn view_transitions() {
        let view = ViewState::default().with_page(3);
        assert_eq!(view.clone().with_search("ja").current_page, 1);
        assert_eq!(view.clone().with_region("Asia").current_page, 1);

        let sorted = view.with_sort(SortField::Name);
        assert_eq!(sorted.current_page, 3);
        assert_eq!(
            sorted.sort,
            Some(SortState::new(SortField::Name, SortDirection::Ascending))
        );
        assert_eq!(ViewState::reset(), ViewState::default());
    }

    #[test]
    fn new_directory_is_one_empty_page() {
        let dir = Directory::new(DirectoryConfig::default(), Offline).unwrap();
        let snap = dir.snapshot();
        assert!(snap.page_items.is_empty());
        assert_eq!(snap.total_pages, 1);
        assert!(!snap.loading);
    }

    #[test]
    fn offline_reload_installs_sample() {
        let dir = loaded(12);
        assert!(dir.is_degraded());
        assert!(!dir.is_loading());
        assert_eq!(dir.records(), sample_countries().as_slice());
        assert_eq!(dir.snapshot().page_items.len(), 10);
    }

    #[test]
    fn sort_keeps_page_and_search_resets_it() {
        let mut dir = loaded(4);
        dir.go_to_page(2).unwrap();
        assert_eq!(dir.sort_by("population").unwrap().current_page, 2);
        assert_eq!(dir.search("a").unwrap().current_page, 1);
    }

    #[test]
    fn out_of_range_page_changes_nothing() {
        let mut dir = loaded(4);
        dir.go_to_page(2).unwrap();
        let before = dir.snapshot().clone();
        assert!(matches!(
            dir.go_to_page(4),
            Err(DirectoryError::PageOutOfRange { requested: 4, total: 3 })
        ));
        assert_eq!(dir.snapshot(), &before);
        assert!(dir.go_to_page(0).is_err());
    }

    #[test]
    fn next_and_previous_stop_at_the_edges() {
        let mut dir = loaded(4);
        assert_eq!(dir.previous_page().unwrap().current_page, 1);
        dir.next_page().unwrap();
        assert_eq!(dir.next_page().unwrap().current_page, 3);
        assert_eq!(dir.next_page().unwrap().current_page, 3);
        assert_eq!(dir.previous_page().unwrap().current_page, 2);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut dir = loaded(12);
        let first = dir.begin_reload().unwrap();
        let second = dir.begin_lookup("japan").unwrap();
        assert!(dir.snapshot().loading);

        let remote = Loaded {
            records: vec![sample_countries()[0].clone()],
            origin: Origin::Remote,
        };
        assert_eq!(dir.complete_reload(&first, remote).unwrap(), Applied::Stale);
        assert!(dir.is_loading());
        assert_eq!(dir.records().len(), 10);

        let japan = vec![sample_countries()[1].clone()];
        assert_eq!(
            dir.complete_lookup(&second, Ok(japan)).unwrap(),
            Applied::Applied
        );
        assert!(!dir.is_loading());
        assert_eq!(dir.snapshot().names(), vec!["Japan"]);
        assert_eq!(dir.snapshot().lookup.as_deref(), Some("japan"));
        assert_eq!(dir.records().len(), 10);

        // Completing again after the ticket was consumed is stale too.
        assert_eq!(
            dir.complete_lookup(&second, Ok(Vec::new())).unwrap(),
            Applied::Stale
        );
    }

    #[test]
    fn failed_lookup_keeps_collection() {
        let mut dir = loaded(12);
        dir.search("in").unwrap();
        let before = dir.view().clone();

        let err = dir.lookup_by_name("japan").unwrap_err();
        assert!(matches!(err, DirectoryError::SourceUnavailable(_)));
        assert_eq!(dir.records().len(), 10);
        assert_eq!(dir.view(), &before);
        assert!(!dir.is_loading());

        assert!(matches!(
            dir.lookup_by_name("  "),
            Err(DirectoryError::Validation(_))
        ));
        assert!(!dir.is_loading());
    }

    #[test]
    fn reload_resets_view_but_keeps_favorites() {
        let mut dir = loaded(4);
        dir.favorite(&IdentityKey::from("Japan"), "sushi").unwrap();
        dir.search("an").unwrap();
        dir.sort_by("name").unwrap();

        dir.reload().unwrap();
        assert_eq!(dir.view(), &ViewState::default());
        assert_eq!(dir.snapshot().favorites.len(), 1);
    }

    #[test]
    fn create_edit_delete_user_records() {
        let mut dir = loaded(4);
        dir.go_to_page(3).unwrap();

        let key = dir
            .create_country(CountryDraft::named("Atlantis").with_region("Oceania"))
            .unwrap();
        assert_eq!(dir.view().current_page, 1);
        assert_eq!(dir.records().last().unwrap().name(), "Atlantis");

        dir.edit_country(&key, CountryDraft::named("Lemuria")).unwrap();
        assert_eq!(dir.get(&key).unwrap().name(), "Lemuria");
        assert!(dir.get(&key).unwrap().region.is_none());

        assert!(matches!(
            dir.edit_country(&key, CountryDraft::named("  ")),
            Err(DirectoryError::Validation(_))
        ));
        assert_eq!(dir.get(&key).unwrap().name(), "Lemuria");

        dir.delete_country(&key).unwrap();
        assert!(dir.get(&key).is_none());
        assert_eq!(dir.records().len(), 10);
        assert!(matches!(
            dir.delete_country(&key),
            Err(DirectoryError::UnknownRecord(_))
        ));
    }

    #[test]
    fn fetched_records_are_read_only() {
        let mut dir = loaded(12);
        assert!(matches!(
            dir.delete_country(&IdentityKey::from("Japan")),
            Err(DirectoryError::ReadOnlyRecord(_))
        ));
        assert_eq!(dir.records().len(), 10);
    }

    #[test]
    fn page_items_carry_favorite_flag() {
        let mut dir = loaded(12);
        let snap = dir.favorite(&IdentityKey::from("Japan"), "").unwrap();
        let flagged: Vec<_> = snap
            .page_items
            .iter()
            .filter(|item| item.is_favorite)
            .map(|item| item.record.name())
            .collect();
        assert_eq!(flagged, vec!["Japan"]);

        let snap = dir.unfavorite(&IdentityKey::from("Japan")).unwrap();
        assert!(snap.page_items.iter().all(|item| !item.is_favorite));
        assert!(dir.unfavorite(&IdentityKey::from("Japan")).is_ok());
    }

    #[test]
    fn favorites_follow_the_active_sort() {
        let mut dir = loaded(12);
        for name in ["Japan", "Brazil", "Egypt"] {
            dir.favorite(&IdentityKey::from(name), "").unwrap();
        }
        let snap = dir.sort_by("name").unwrap();
        let names: Vec<_> = snap.favorites.iter().map(|f| f.record.name()).collect();
        assert_eq!(names, vec!["Brazil", "Egypt", "Japan"]);

        let asia = dir.favorites_view(&FilterCriteria::new("", "Asia"));
        assert_eq!(asia.len(), 1);
    }

    #[test]
    fn favorite_requires_a_known_record() {
        let mut dir = loaded(12);
        assert!(matches!(
            dir.favorite(&IdentityKey::from("Atlantis"), ""),
            Err(DirectoryError::UnknownRecord(_))
        ));
        assert!(matches!(
            dir.update_favorite_note(&IdentityKey::from("Japan"), "x"),
            Err(DirectoryError::UnknownRecord(_))
        ));
    }

    #[test]
    fn stats_count_the_session() {
        let mut dir = loaded(12);
        dir.create_country(CountryDraft::named("Atlantis")).unwrap();
        dir.favorite(&IdentityKey::from("Japan"), "").unwrap();
        dir.set_region("Asia").unwrap();
        assert_eq!(
            dir.stats(),
            DirectoryStats {
                countries: 11,
                user_created: 1,
                matching: 3,
                favorites: 1,
                regions: 5,
            }
        );
    }

    #[test]
    fn reload_keeps_user_created_records() {
        let mut dir = loaded(12);
        let key = dir
            .create_country(CountryDraft::named("Atlantis").with_region("Oceania"))
            .unwrap();

        dir.reload().unwrap();
        assert_eq!(dir.records().len(), 11);
        assert_eq!(dir.get(&key).unwrap().name(), "Atlantis");
        assert_eq!(dir.records().last().unwrap().identity_key(), key);
        assert_eq!(dir.stats().user_created, 1);
    }

    #[test]
    fn lookup_is_shown_until_cleared() {
        let mut dir = loaded(12);
        let peru = CountryRecord::from_draft(CountryDraft::named("Peru"))
            .map(|mut r| {
                r.is_user_created = false;
                r.local_id = None;
                r
            })
            .unwrap();

        let ticket = dir.begin_lookup("peru").unwrap();
        dir.complete_lookup(&ticket, Ok(vec![peru])).unwrap();
        assert_eq!(dir.snapshot().names(), vec!["Peru"]);
        assert_eq!(dir.records().len(), 10);

        // Lookup results can be favorited even though they are not canonical.
        dir.favorite(&IdentityKey::from("Peru"), "").unwrap();
        assert!(dir.snapshot().page_items[0].is_favorite);

        let snap = dir.clear_lookup().unwrap();
        assert!(snap.lookup.is_none());
        assert_eq!(snap.page_items.len(), 10);
        assert_eq!(snap.favorites.len(), 1);

        let ticket = dir.begin_lookup("peru").unwrap();
        dir.complete_lookup(&ticket, Ok(vec![sample_countries()[1].clone()]))
            .unwrap();
        assert_eq!(dir.snapshot().names(), vec!["Japan"]);
        let snap = dir.set_region("").unwrap();
        assert!(snap.lookup.is_none());
        assert_eq!(snap.total_matches, 10);
    }

    #[test]
    fn collection_change_ends_lookup() {
        let mut dir = loaded(12);
        let ticket = dir.begin_lookup("japan").unwrap();
        dir.complete_lookup(&ticket, Ok(vec![sample_countries()[1].clone()]))
            .unwrap();

        dir.create_country(CountryDraft::named("Atlantis")).unwrap();
        assert!(dir.snapshot().lookup.is_none());
        assert_eq!(dir.snapshot().total_matches, 11);
    }

    #[test]
    fn fetched_record_cannot_take_another_fetched_name() {
        let mut dir = loaded(12);
        let japan = IdentityKey::from("Japan");
        for name in ["Brazil", "  Brazil "] {
            assert!(matches!(
                dir.edit_country(&japan, CountryDraft::named(name)),
                Err(DirectoryError::Validation(_))
            ));
        }
        assert_eq!(dir.get(&japan).unwrap().name(), "Japan");

        let snap = dir.favorite(&IdentityKey::from("Brazil"), "").unwrap();
        let flagged = snap.page_items.iter().filter(|i| i.is_favorite).count();
        assert_eq!(flagged, 1);

        // Keeping its own name, or taking a free one, is fine.
        dir.edit_country(&japan, CountryDraft::named("Japan").with_capital("Kyoto"))
            .unwrap();
        dir.edit_country(&japan, CountryDraft::named("Nippon")).unwrap();
        assert!(dir.get(&IdentityKey::from("Nippon")).is_some());

        // User-created records are keyed by local id and may share a name.
        let key = dir.create_country(CountryDraft::named("Atlantis")).unwrap();
        dir.edit_country(&key, CountryDraft::named("Brazil")).unwrap();
        assert_eq!(dir.get(&key).unwrap().name(), "Brazil");
    }
}
