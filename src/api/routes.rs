//! # Note Routes
//!
//! Axum handlers for the note resource, generic over the store behind
//! the service. Validation happens here at the boundary; handlers hand
//! the service already-validated domain values.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::listing::ListingPage;
use crate::model::Note;
use crate::service::NoteService;
use crate::store::NoteStore;

use super::errors::ApiError;
use super::request;

/// Routes for the note resource, sharing one service instance.
pub fn notes_routes<S: NoteStore + 'static>(service: NoteService<S>) -> Router {
    Router::new()
        .route("/notes", get(list_notes::<S>).post(create_note::<S>))
        .route(
            "/notes/:note_id",
            get(get_note::<S>)
                .patch(update_note::<S>)
                .delete(delete_note::<S>),
        )
        .with_state(service)
}

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /notes` — the planned listing query
async fn list_notes<S: NoteStore + 'static>(
    State(service): State<NoteService<S>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListingPage>, ApiError> {
    let request = request::parse_listing(&params)?;
    let page = service.list(request).await?;
    Ok(Json(page))
}

/// `GET /notes/:noteId`
async fn get_note<S: NoteStore + 'static>(
    State(service): State<NoteService<S>>,
    Path(note_id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = request::parse_note_id(&note_id)?;
    let note = service.get(id).await?;
    Ok(Json(note))
}

/// `POST /notes`
async fn create_note<S: NoteStore + 'static>(
    State(service): State<NoteService<S>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let draft = request::parse_create(body)?;
    let note = service.create(draft).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// `PATCH /notes/:noteId`
async fn update_note<S: NoteStore + 'static>(
    State(service): State<NoteService<S>>,
    Path(note_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Note>, ApiError> {
    let id = request::parse_note_id(&note_id)?;
    let patch = request::parse_update(body)?;
    let note = service.update(id, patch).await?;
    Ok(Json(note))
}

/// `DELETE /notes/:noteId` — returns the deleted note's last snapshot
async fn delete_note<S: NoteStore + 'static>(
    State(service): State<NoteService<S>>,
    Path(note_id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = request::parse_note_id(&note_id)?;
    let note = service.remove(id).await?;
    Ok(Json(note))
}
