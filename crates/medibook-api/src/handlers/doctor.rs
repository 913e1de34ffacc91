//! Doctor handlers — registration, login, appointment list, status updates.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use medibook_core::error::AppError;
use medibook_service::auth::RegisterDoctor;

use crate::dto::request::{LoginRequest, RegisterDoctorRequest, UpdateAppointmentStatusRequest};
use crate::dto::response::{
    AppointmentListResponse, AppointmentResponse, DoctorAppointmentResponse, TokenResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Json};
use crate::middleware::rbac::require_doctor;
use crate::state::AppState;

/// POST /api/doctor/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterDoctorRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let issued = state
        .auth_service
        .register_doctor(RegisterDoctor {
            name: req.name,
            email: req.email,
            mobile: req.mobile,
            specialty: req.specialty,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: issued.token,
            expires_at: issued.expires_at,
        }),
    ))
}

/// POST /api/doctor/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let issued = state
        .auth_service
        .login_doctor(&req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// GET /api/doctor/appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AppointmentListResponse<DoctorAppointmentResponse>>, ApiError> {
    require_doctor(&auth)?;

    let appointments = state
        .appointment_service
        .appointments_for_doctor(&auth)
        .await?;
    Ok(Json(AppointmentListResponse {
        appointments: appointments
            .into_iter()
            .map(DoctorAppointmentResponse::from)
            .collect(),
    }))
}

/// PATCH /api/doctor/appointments/{appointment_id}
pub async fn update_appointment_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<Uuid>,
    Json(req): Json<UpdateAppointmentStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_doctor(&auth)?;

    let appointment = state
        .appointment_service
        .update_status(&auth, appointment_id, req.status)
        .await?;

    Ok(Json(serde_json::json!({
        "appointment": AppointmentResponse::from(appointment)
    })))
}
