pub mod products;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{error::AppError, models::HealthStatus, AppState};

// ── /health (any method) ─────────────────────────────────────────────────────

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(Utc::now(), state.store.len()))
}

/// Fallback for any method a route does not handle.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
