//! Patient repository implementation.

use sqlx::PgPool;

use medibook_core::error::{AppError, ErrorKind};
use medibook_core::result::AppResult;
use medibook_entity::patient::{CreatePatient, Patient};

/// Repository for patient persistence and lookups.
#[derive(Debug, Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    /// Create a new patient repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a patient by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Patient>> {
        sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find patient by email", e)
            })
    }

    /// Create a new patient.
    ///
    /// Email uniqueness is enforced by the `patients_email_key` constraint;
    /// a collision surfaces as a `Conflict` error.
    pub async fn create(&self, data: &CreatePatient) -> AppResult<Patient> {
        sqlx::query_as::<_, Patient>(
            "INSERT INTO patients (name, email, mobile, problem, password_hash) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(&data.problem)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("patients_email_key") =>
            {
                AppError::conflict("Patient already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create patient", e),
        })
    }
}
