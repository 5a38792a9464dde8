//! Diagnostics handler

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::services::probe;
use super::super::state::AppState;
use super::super::types::DiagnosticsReport;

/// Backend and database diagnostics
///
/// Always answers 200. Store problems are reported inside the body
/// (`database` field), never as an error status.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostics report", body = DiagnosticsReport, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<DiagnosticsReport> {
    Json(probe(state.store.clone(), state.env).await)
}
