//! Patient handlers — registration, login, booking, appointment history.

use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use medibook_core::error::AppError;
use medibook_service::appointment::BookAppointment;
use medibook_service::auth::RegisterPatient;

use crate::dto::request::{BookAppointmentRequest, LoginRequest, RegisterPatientRequest};
use crate::dto::response::{
    AppointmentListResponse, AppointmentResponse, BookingResponse, PatientAppointmentResponse,
    TokenResponse,
};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Json};
use crate::middleware::rbac::require_patient;
use crate::state::AppState;

/// POST /api/patient/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let issued = state
        .auth_service
        .register_patient(RegisterPatient {
            name: req.name,
            email: req.email,
            mobile: req.mobile,
            problem: req.problem,
            password: req.password,
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

/// POST /api/patient/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let issued = state
        .auth_service
        .login_patient(&req.email, &req.password)
        .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

/// POST /api/patient/book-appointment
pub async fn book_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    require_patient(&auth)?;
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))?;

    let appointment = state
        .appointment_service
        .book(
            &auth,
            BookAppointment {
                doctor_id: req.doctor_id,
                category: req.category,
                date: req.date,
                time: req.time,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Appointment booked successfully!".to_string(),
            appointment: AppointmentResponse::from(appointment),
        }),
    ))
}

/// GET /api/patient/appointment-history
pub async fn appointment_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AppointmentListResponse<PatientAppointmentResponse>>, ApiError> {
    require_patient(&auth)?;

    let appointments = state.appointment_service.history_for_patient(&auth).await?;
    Ok(Json(AppointmentListResponse {
        appointments: appointments
            .into_iter()
            .map(PatientAppointmentResponse::from)
            .collect(),
    }))
}
