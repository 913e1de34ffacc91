//! Doctor repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use medibook_core::error::{AppError, ErrorKind};
use medibook_core::result::AppResult;
use medibook_entity::doctor::{CreateDoctor, Doctor};

/// Repository for doctor persistence, lookups, and cascading deletion.
#[derive(Debug, Clone)]
pub struct DoctorRepository {
    pool: PgPool,
}

impl DoctorRepository {
    /// Create a new doctor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a doctor by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find doctor by id", e)
            })
    }

    /// Find a doctor by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find doctor by email", e)
            })
    }

    /// List all registered doctors.
    pub async fn find_all(&self) -> AppResult<Vec<Doctor>> {
        sqlx::query_as::<_, Doctor>("SELECT * FROM doctors ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list doctors", e))
    }

    /// Create a new doctor.
    ///
    /// Email uniqueness is enforced by the `doctors_email_key` constraint;
    /// a collision surfaces as a `Conflict` error.
    pub async fn create(&self, data: &CreateDoctor) -> AppResult<Doctor> {
        sqlx::query_as::<_, Doctor>(
            "INSERT INTO doctors (name, email, mobile, specialty, password_hash) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile)
        .bind(&data.specialty)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("doctors_email_key") =>
            {
                AppError::conflict("Doctor already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create doctor", e),
        })
    }

    /// Delete a doctor and cancel their pending appointments in one transaction.
    ///
    /// The doctor row is locked first so the cancellation and the delete are
    /// never observed partially applied. Returns the number of appointments
    /// cancelled, or `NotFound` if the doctor does not exist.
    pub async fn delete_with_cancellation(&self, doctor_id: Uuid) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM doctors WHERE id = $1 FOR UPDATE")
                .bind(doctor_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to lock doctor row", e)
                })?;

        if exists.is_none() {
            return Err(AppError::not_found("Doctor not found"));
        }

        let cancelled = sqlx::query(
            "UPDATE appointments SET status = 'cancelled' \
             WHERE doctor_id = $1 AND status = 'pending'",
        )
        .bind(doctor_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to cancel pending appointments",
                e,
            )
        })?
        .rows_affected();

        sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(doctor_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete doctor", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit doctor deletion", e)
        })?;

        Ok(cancelled)
    }
}
