//! # Document Store Interface
//!
//! The store is the service's only collaborator with state: a collection
//! of note documents supporting exact-match tag filtering, whole-text
//! relevance search over title + content, match counting, and windowed
//! sorted retrieval, plus point operations by id.
//!
//! Query layers build a [`NoteFilter`] and a [`SortSpec`] once and pass
//! them opaquely; relevance scoring internals belong to the store.

mod errors;
mod memory;
pub mod text;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryNoteStore;

use std::future::Future;

use uuid::Uuid;

use crate::model::{Note, NoteDraft, NotePatch, SortDirection, SortField, Tag};

/// Filter over the note collection.
///
/// Both constraints are optional; when both are present they compose as
/// logical AND (the text search narrows within the tag subset). `search`
/// is trimmed and non-empty by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    pub tag: Option<Tag>,
    pub search: Option<String>,
}

impl NoteFilter {
    /// True when a whole-text search constraint is active.
    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }
}

/// Sort order for a windowed fetch.
///
/// Built once per listing and passed opaquely to the store. The
/// relevance variant puts the store-computed text score first
/// (descending) so best-matching notes surface before the requested
/// business sort applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSpec {
    /// Sort solely by the requested field.
    FieldOnly {
        field: SortField,
        direction: SortDirection,
    },
    /// Descending relevance score first, then the requested field.
    RelevanceThen {
        field: SortField,
        direction: SortDirection,
    },
}

/// Async interface to the note collection.
///
/// Point lookups return `Ok(None)` for an absent id; absence is not an
/// error at this layer. Any `Err` is a store failure and is propagated
/// unchanged by callers.
///
/// Methods are declared as `impl Future + Send` rather than `async fn`
/// so generic consumers (the axum handlers) can hold the futures across
/// task boundaries; implementations still write plain `async fn`.
pub trait NoteStore: Send + Sync {
    /// Count documents matching the filter, independent of sort and window.
    fn count_matching(&self, filter: &NoteFilter)
        -> impl Future<Output = StoreResult<usize>> + Send;

    /// Fetch at most `limit` matching documents starting at `skip`, in
    /// the given sort order. Returned notes are point-in-time snapshots.
    fn find_matching(
        &self,
        filter: &NoteFilter,
        sort: &SortSpec,
        skip: usize,
        limit: usize,
    ) -> impl Future<Output = StoreResult<Vec<Note>>> + Send;

    /// Insert a new document, assigning its id and timestamps.
    fn insert(&self, draft: NoteDraft) -> impl Future<Output = StoreResult<Note>> + Send;

    /// Fetch a single document by id.
    fn find_by_id(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<Note>>> + Send;

    /// Apply the provided fields only, refreshing `updated_at`.
    fn update_by_id(
        &self,
        id: Uuid,
        patch: NotePatch,
    ) -> impl Future<Output = StoreResult<Option<Note>>> + Send;

    /// Remove a document, returning its last snapshot.
    fn delete_by_id(&self, id: Uuid) -> impl Future<Output = StoreResult<Option<Note>>> + Send;
}
