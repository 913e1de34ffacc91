//! Application state shared across all handlers.

use std::sync::Arc;

use medibook_auth::admin::AdminCredential;
use medibook_auth::jwt::{JwtDecoder, JwtEncoder};
use medibook_auth::password::PasswordHasher;
use medibook_core::config::AppConfig;
use medibook_database::repositories::appointment::AppointmentRepository;
use medibook_database::repositories::doctor::DoctorRepository;
use medibook_database::repositories::patient::PatientRepository;
use medibook_database::DatabasePool;
use medibook_service::appointment::AppointmentService;
use medibook_service::auth::AuthService;
use medibook_service::doctor::DoctorAdminService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, exposed for health checks.
    pub db: DatabasePool,
    /// JWT token decoder, used by the session-guard extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Appointment lifecycle service.
    pub appointment_service: Arc<AppointmentService>,
    /// Doctor directory and administration service.
    pub doctor_admin_service: Arc<DoctorAdminService>,
}

impl AppState {
    /// Builds the full application state from configuration and a pool.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let admin = Arc::new(AdminCredential::new(&config.auth));

        let patient_repo = Arc::new(PatientRepository::new(db.pool().clone()));
        let doctor_repo = Arc::new(DoctorRepository::new(db.pool().clone()));
        let appointment_repo = Arc::new(AppointmentRepository::new(db.pool().clone()));

        let auth_service = Arc::new(AuthService::new(
            patient_repo,
            Arc::clone(&doctor_repo),
            password_hasher,
            jwt_encoder,
            admin,
            config.auth.password_min_length,
        ));
        let appointment_service = Arc::new(AppointmentService::new(
            appointment_repo,
            Arc::clone(&doctor_repo),
        ));
        let doctor_admin_service = Arc::new(DoctorAdminService::new(doctor_repo));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            auth_service,
            appointment_service,
            doctor_admin_service,
        }
    }
}
