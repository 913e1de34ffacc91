//! Health check handler.

use axum::extract::State;
use axum::Json;

use medibook_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
///
/// Verifies database connectivity; a failed check surfaces as a 500.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    if !state.db.health_check().await? {
        return Err(ApiError(AppError::database("Database health check failed")));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
