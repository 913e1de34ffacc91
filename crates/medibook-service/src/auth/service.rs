//! Registration and login for all three roles.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use medibook_auth::admin::AdminCredential;
use medibook_auth::jwt::{IssuedToken, JwtEncoder};
use medibook_auth::password::PasswordHasher;
use medibook_core::error::AppError;
use medibook_database::repositories::doctor::DoctorRepository;
use medibook_database::repositories::patient::PatientRepository;
use medibook_entity::doctor::CreateDoctor;
use medibook_entity::patient::CreatePatient;
use medibook_entity::role::Role;

/// Handles registration and login for patients, doctors, and the admin.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Patient repository.
    patient_repo: Arc<PatientRepository>,
    /// Doctor repository.
    doctor_repo: Arc<DoctorRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    encoder: Arc<JwtEncoder>,
    /// The configured administrator credential.
    admin: Arc<AdminCredential>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

/// Data for a patient registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterPatient {
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Presenting problem.
    pub problem: String,
    /// Plaintext password.
    pub password: String,
}

/// Data for a doctor registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterDoctor {
    /// Full name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Medical specialty.
    pub specialty: String,
    /// Plaintext password.
    pub password: String,
    /// Password confirmation. Doctor registration checks it; patient
    /// registration deliberately does not (see DESIGN.md).
    pub confirm_password: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        patient_repo: Arc<PatientRepository>,
        doctor_repo: Arc<DoctorRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        admin: Arc<AdminCredential>,
        password_min_length: usize,
    ) -> Self {
        Self {
            patient_repo,
            doctor_repo,
            hasher,
            encoder,
            admin,
            password_min_length,
        }
    }

    /// Registers a new patient and issues a session token.
    pub async fn register_patient(&self, req: RegisterPatient) -> Result<IssuedToken, AppError> {
        self.validate_password(&req.password)?;

        if self.patient_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Patient already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let patient = self
            .patient_repo
            .create(&CreatePatient {
                name: req.name,
                email: req.email,
                mobile: req.mobile,
                problem: req.problem,
                password_hash,
            })
            .await?;

        info!(patient_id = %patient.id, "Patient registered");
        self.encoder.issue(patient.id, Role::Patient)
    }

    /// Registers a new doctor and issues a session token.
    pub async fn register_doctor(&self, req: RegisterDoctor) -> Result<IssuedToken, AppError> {
        if req.password != req.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        self.validate_password(&req.password)?;

        if self.doctor_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Doctor already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let doctor = self
            .doctor_repo
            .create(&CreateDoctor {
                name: req.name,
                email: req.email,
                mobile: req.mobile,
                specialty: req.specialty,
                password_hash,
            })
            .await?;

        info!(doctor_id = %doctor.id, "Doctor registered");
        self.encoder.issue(doctor.id, Role::Doctor)
    }

    /// Logs a patient in by email and password.
    pub async fn login_patient(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let patient = self.patient_repo.find_by_email(email).await?;
        let (id, hash) = match &patient {
            Some(p) => (p.id, p.password_hash.as_str()),
            // Unknown identity and wrong password must be indistinguishable.
            None => return Err(AppError::unauthorized("Invalid credentials")),
        };

        if !self.hasher.verify_password(password, hash)? {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        info!(patient_id = %id, "Patient logged in");
        self.encoder.issue(id, Role::Patient)
    }

    /// Logs a doctor in by email and password.
    pub async fn login_doctor(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let doctor = self.doctor_repo.find_by_email(email).await?;
        let (id, hash) = match &doctor {
            Some(d) => (d.id, d.password_hash.as_str()),
            None => return Err(AppError::unauthorized("Invalid credentials")),
        };

        if !self.hasher.verify_password(password, hash)? {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        info!(doctor_id = %id, "Doctor logged in");
        self.encoder.issue(id, Role::Doctor)
    }

    /// Logs the administrator in against the configured credential.
    ///
    /// The admin has no database record; the subject embedded in the token
    /// is the nil UUID.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        self.admin.verify(email, password)?;
        info!("Admin logged in");
        self.encoder.issue(Uuid::nil(), Role::Admin)
    }

    fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
