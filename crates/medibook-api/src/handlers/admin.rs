//! Administrator handlers — login, doctor listing, doctor deletion.

use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use medibook_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{DoctorListResponse, DoctorResponse, MessageResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Json};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let issued = state
        .auth_service
        .login_admin(&req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// GET /api/admin/doctors
pub async fn list_doctors(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<DoctorListResponse>, ApiError> {
    require_admin(&auth)?;

    let doctors = state.doctor_admin_service.list_doctors().await?;
    Ok(Json(DoctorListResponse {
        doctors: doctors.into_iter().map(DoctorResponse::from).collect(),
    }))
}

/// DELETE /api/admin/doctors/{doctor_id}
pub async fn delete_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    require_admin(&auth)?;

    state
        .doctor_admin_service
        .delete_doctor(&auth, doctor_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Doctor and pending appointments deleted successfully".to_string(),
    }))
}
