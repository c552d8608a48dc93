//! # Note Service
//!
//! Operations facade exposed to the HTTP adapter: the planned listing
//! query plus the four pass-through point operations. The store is a
//! long-lived dependency injected at construction; the service holds no
//! other state.

mod errors;

pub use errors::{ServiceError, ServiceResult};

use std::sync::Arc;

use uuid::Uuid;

use crate::listing::{ListingPage, ListingPlan, ListingRequest};
use crate::model::{Note, NoteDraft, NotePatch};
use crate::store::{NoteStore, StoreResult};

/// Note operations over an injected store
pub struct NoteService<S> {
    store: Arc<S>,
}

impl<S> Clone for NoteService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: NoteStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Run one listing call: build the plan, issue the count and the
    /// windowed fetch concurrently (they share the filter but have no
    /// ordering dependency), then assemble the envelope once both
    /// complete. Store failures propagate unchanged.
    pub async fn list(&self, request: ListingRequest) -> StoreResult<ListingPage> {
        let plan = ListingPlan::build(&request);

        let (total_notes, notes) = tokio::join!(
            self.store.count_matching(&plan.filter),
            self.store
                .find_matching(&plan.filter, &plan.sort, plan.skip, plan.limit),
        );

        Ok(ListingPage::assemble(&request, total_notes?, notes?))
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Note> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    pub async fn create(&self, draft: NoteDraft) -> ServiceResult<Note> {
        Ok(self.store.insert(draft).await?)
    }

    /// Apply a partial update; only the provided fields change, and the
    /// store refreshes `updated_at`.
    pub async fn update(&self, id: Uuid, patch: NotePatch) -> ServiceResult<Note> {
        self.store
            .update_by_id(id, patch)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Remove a note, returning its last snapshot.
    pub async fn remove(&self, id: Uuid) -> ServiceResult<Note> {
        self.store
            .delete_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;
    use crate::store::MemoryNoteStore;

    fn service() -> NoteService<MemoryNoteStore> {
        NoteService::new(MemoryNoteStore::new())
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();
        let note = service
            .create(NoteDraft::new("Plan trip").with_tag(Tag::Travel))
            .await
            .unwrap();

        let fetched = service.get(note.id).await.unwrap();
        assert_eq!(fetched, note);
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let service = service();
        let result = service.get(Uuid::new_v4()).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_absent_is_not_found() {
        let service = service();
        let patch = NotePatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let result = service.update(Uuid::new_v4(), patch).await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn test_remove_returns_snapshot() {
        let service = service();
        let note = service.create(NoteDraft::new("Bye")).await.unwrap();

        let removed = service.remove(note.id).await.unwrap();
        assert_eq!(removed, note);
        assert!(matches!(
            service.get(note.id).await,
            Err(ServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let service = service();
        let page = service.list(ListingRequest::default()).await.unwrap();

        assert_eq!(page.total_notes, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.notes.is_empty());
    }
}
