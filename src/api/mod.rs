//! # HTTP Adapter
//!
//! The outward-facing surface of the service: request validation,
//! routes, error mapping, and the server itself.
//!
//! Endpoints:
//! - `GET    /notes` — paginated, filtered, searchable listing
//! - `POST   /notes` — create (201)
//! - `GET    /notes/:noteId`
//! - `PATCH  /notes/:noteId` — partial update
//! - `DELETE /notes/:noteId` — returns the deleted note
//! - `GET    /health`

mod config;
mod errors;
pub mod request;
mod routes;
mod server;

pub use config::ApiConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{health_routes, notes_routes};
pub use server::ApiServer;
