//! # jotfile-api
//!
//! HTTP surface for jotfile. Handlers, the response envelope, and error
//! mapping live here; `main.rs` composes the store/service pair and binds
//! the listener.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;
use uuid::Uuid;

use jotfile_core::CreateNoteRequest;
use jotfile_store::NoteService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
}

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
}

fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        success: true,
        data,
    })
}

/// Build the API router over the given service.
pub fn router(service: Arc<NoteService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", delete(delete_note))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.service.list().await?;
    Ok(ok(notes))
}

async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Map extractor rejections ourselves so the error envelope stays uniform
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let note = state.service.create(req).await?;
    Ok(ok(note))
}

async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A malformed id matches no note, same as an unknown one
    let Path(id) = id.map_err(|_| ApiError::NotFound("not found".to_string()))?;
    state.service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn health() -> impl IntoResponse {
    ok(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(jotfile_core::Error),
}

impl From<jotfile_core::Error> for ApiError {
    fn from(err: jotfile_core::Error) -> Self {
        match &err {
            jotfile_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            jotfile_core::Error::NoteNotFound(_) => ApiError::NotFound("not found".to_string()),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(err) => {
                warn!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message,
        }));

        (status, body).into_response()
    }
}
