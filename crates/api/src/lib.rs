//! Shared API types and SQL builders for the chatpyy backend.
//!
//! This crate is the single source of truth for all request/response shapes
//! exposed by the HTTP server, plus the SQL layer (table identifiers, query
//! builders, canonical migrations) used against the SQLite database.

use serde::{Deserialize, Serialize};

pub mod db;

// ─── Health ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// A single event row as returned by list/get endpoints.
///
/// `date` is passed through verbatim — the server never parses or validates
/// it; the caller and the storage engine agree on the format between
/// themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
}

// ─── Notes ───────────────────────────────────────────────────────────────────

/// A single note row as returned by the list endpoint.
///
/// `shared_with` is opaque to the server (a caller-maintained serialized
/// list); `is_private` is stored and echoed back but never enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub is_private: bool,
    pub shared_with: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_private: bool,
    pub shared_with: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_private: bool,
    pub shared_with: String,
}

// ─── Generic acknowledgments ─────────────────────────────────────────────────

/// `201 Created` acknowledgment carrying the database-generated id.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Plain `{"message": ...}` acknowledgment for update/delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
