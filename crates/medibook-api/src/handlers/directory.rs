//! Public doctor directory.

use axum::extract::State;
use axum::Json;

use crate::dto::response::{DoctorListResponse, DoctorResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/doctors
///
/// Unauthenticated: patients browse the directory before registering.
pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<Json<DoctorListResponse>, ApiError> {
    let doctors = state.doctor_admin_service.list_doctors().await?;
    Ok(Json(DoctorListResponse {
        doctors: doctors.into_iter().map(DoctorResponse::from).collect(),
    }))
}
