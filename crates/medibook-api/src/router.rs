//! Route definitions for the MediBook HTTP API.
//!
//! All routes are organized by role and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(admin_routes())
        .merge(doctor_routes())
        .merge(patient_routes())
        .merge(directory_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Admin endpoints: login, doctor listing, doctor deletion
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::admin::login))
        .route("/admin/doctors", get(handlers::admin::list_doctors))
        .route(
            "/admin/doctors/{doctor_id}",
            delete(handlers::admin::delete_doctor),
        )
}

/// Doctor endpoints: register, login, appointments
fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/doctor/register", post(handlers::doctor::register))
        .route("/doctor/login", post(handlers::doctor::login))
        .route(
            "/doctor/appointments",
            get(handlers::doctor::list_appointments),
        )
        .route(
            "/doctor/appointments/{appointment_id}",
            patch(handlers::doctor::update_appointment_status),
        )
}

/// Patient endpoints: register, login, booking, history
fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patient/register", post(handlers::patient::register))
        .route("/patient/login", post(handlers::patient::login))
        .route(
            "/patient/book-appointment",
            post(handlers::patient::book_appointment),
        )
        .route(
            "/patient/appointment-history",
            get(handlers::patient::appointment_history),
        )
}

/// Public doctor directory
fn directory_routes() -> Router<AppState> {
    Router::new().route("/doctors", get(handlers::directory::list_doctors))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
