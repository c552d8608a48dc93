//! # In-Memory Store Engine
//!
//! A complete [`NoteStore`] over a `RwLock`-guarded vector. Insertion
//! order is the engine's stable tie order: sorts are stable, so notes
//! that compare equal keep their insertion order.
//!
//! Text search is backed by [`super::text`]: when a filter carries a
//! search constraint, only documents with a non-zero relevance score
//! match, and the `RelevanceThen` sort variant orders by that score
//! (descending) before the requested field.

use std::cmp::Ordering;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::model::{Note, NoteDraft, NotePatch, SortDirection, SortField};

use super::errors::{StoreError, StoreResult};
use super::text;
use super::{NoteFilter, NoteStore, SortSpec};

/// In-memory note collection
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the matching documents along with their relevance score
    /// (0.0 when the filter has no search constraint).
    fn matching(&self, filter: &NoteFilter) -> StoreResult<Vec<(Note, f64)>> {
        let notes = self
            .notes
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let query = filter.search.as_deref().map(text::terms);

        let mut matched = Vec::new();
        for note in notes.iter() {
            if let Some(tag) = filter.tag {
                if note.tag != tag {
                    continue;
                }
            }

            match &query {
                Some(terms) => {
                    let score = text::score(terms, &note.title, &note.content);
                    if score > 0.0 {
                        matched.push((note.clone(), score));
                    }
                }
                None => matched.push((note.clone(), 0.0)),
            }
        }

        Ok(matched)
    }

    /// Compare two notes on a single sortable field.
    fn compare_field(a: &Note, b: &Note, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Tag => a.tag.as_str().cmp(b.tag.as_str()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable sort of scored documents according to the sort spec.
    fn sort(scored: &mut [(Note, f64)], sort: &SortSpec) {
        scored.sort_by(|(a, a_score), (b, b_score)| match *sort {
            SortSpec::FieldOnly { field, direction } => {
                Self::directed(Self::compare_field(a, b, field), direction)
            }
            SortSpec::RelevanceThen { field, direction } => b_score
                .partial_cmp(a_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| Self::directed(Self::compare_field(a, b, field), direction)),
        });
    }
}

impl NoteStore for MemoryNoteStore {
    async fn count_matching(&self, filter: &NoteFilter) -> StoreResult<usize> {
        Ok(self.matching(filter)?.len())
    }

    async fn find_matching(
        &self,
        filter: &NoteFilter,
        sort: &SortSpec,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<Note>> {
        let mut scored = self.matching(filter)?;
        Self::sort(&mut scored, sort);

        Ok(scored
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|(note, _)| note)
            .collect())
    }

    async fn insert(&self, draft: NoteDraft) -> StoreResult<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            tag: draft.tag,
            created_at: now,
            updated_at: now,
        };

        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;
        notes.push(note.clone());

        Ok(note)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let notes = self
            .notes
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: NotePatch) -> StoreResult<Option<Note>> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let note = match notes.iter_mut().find(|n| n.id == id) {
            Some(note) => note,
            None => return Ok(None),
        };

        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(tag) = patch.tag {
            note.tag = tag;
        }
        note.updated_at = Utc::now();

        Ok(Some(note.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let mut notes = self
            .notes
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))?;

        let idx = match notes.iter().position(|n| n.id == id) {
            Some(idx) => idx,
            None => return Ok(None),
        };

        Ok(Some(notes.remove(idx)))
    }
}
