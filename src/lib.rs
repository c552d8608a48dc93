//! notehub - a small, self-hostable notes HTTP service
//!
//! CRUD over a single note resource backed by a document store with a
//! text index. The listing endpoint merges tag filtering, free-text
//! relevance search, pagination, and configurable sorting into one
//! consistent result envelope; see [`listing`] for the query planner.

pub mod api;
pub mod cli;
pub mod listing;
pub mod model;
pub mod service;
pub mod store;
