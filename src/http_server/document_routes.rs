//! Document HTTP Routes
//!
//! Endpoints for reading the current revision, appending new content, and
//! reading the full history. Digests are computed server-side; the response
//! digest is authoritative for the appended content.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::store::{Revision, RevisionStore};

// ==================
// Shared State
// ==================

/// Document state shared across handlers
pub struct DocumentState {
    pub store: Arc<RevisionStore>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RevisionStore::new()),
        }
    }

    pub fn with_store(store: Arc<RevisionStore>) -> Self {
        Self { store }
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub data: String,
    pub digest: String,
}

impl From<Revision> for DocumentResponse {
    fn from(revision: Revision) -> Self {
        Self {
            data: revision.content_text(),
            digest: revision.digest.to_hex(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub data: String,
    pub digest: String,
    pub sequence: u64,
}

impl From<Revision> for HistoryEntry {
    fn from(revision: Revision) -> Self {
        Self {
            data: revision.content_text(),
            digest: revision.digest.to_hex(),
            sequence: revision.sequence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// ==================
// Document Routes
// ==================

/// Create document routes
pub fn document_routes(state: Arc<DocumentState>) -> Router {
    Router::new()
        .route("/", get(read_handler))
        .route("/", post(append_handler))
        .route("/history", get(history_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Current revision: content plus its digest
async fn read_handler(State(state): State<Arc<DocumentState>>) -> Json<DocumentResponse> {
    Json(state.store.read().into())
}

/// Append new content; the returned digest is the store's, not the client's
///
/// A rejected body fails before the store is touched, so history stays
/// unchanged on malformed requests.
async fn append_handler(
    State(state): State<Arc<DocumentState>>,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DocumentResponse>), (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = body.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
                code: StatusCode::BAD_REQUEST.as_u16(),
            }),
        )
    })?;

    let revision = state.store.append(request.data.into_bytes());
    Ok((StatusCode::OK, Json(revision.into())))
}

/// Full history, oldest first
async fn history_handler(State(state): State<Arc<DocumentState>>) -> Json<Vec<HistoryEntry>> {
    let history = state
        .store
        .read_history()
        .into_iter()
        .map(HistoryEntry::from)
        .collect();
    Json(history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_response_from_revision() {
        let store = RevisionStore::new();
        let response: DocumentResponse = store.read().into();
        assert_eq!(response.data, "Hello World");
        assert_eq!(
            response.digest,
            "a591a6d40bf420404a011733cfb7b190d62c65bf0bcda32b57b277d9ad9f146e"
        );
    }

    #[test]
    fn test_history_entry_carries_sequence() {
        let store = RevisionStore::new();
        let revision = store.append(b"New Value".to_vec());
        let entry: HistoryEntry = revision.into();
        assert_eq!(entry.sequence, 1);
        assert_eq!(entry.data, "New Value");
    }
}
