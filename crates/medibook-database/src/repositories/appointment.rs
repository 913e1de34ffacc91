//! Appointment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use medibook_core::error::{AppError, ErrorKind};
use medibook_core::result::AppResult;
use medibook_entity::appointment::{
    Appointment, AppointmentStatus, CreateAppointment, DoctorAppointment, PatientAppointment,
};

/// Repository for appointment persistence and joined read projections.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an appointment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find appointment by id", e)
            })
    }

    /// Create a new appointment in status `pending`.
    pub async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (patient_id, doctor_id, category, date, time, status) \
             VALUES ($1, $2, $3, $4, $5, 'pending') \
             RETURNING *",
        )
        .bind(data.patient_id)
        .bind(data.doctor_id)
        .bind(&data.category)
        .bind(data.date)
        .bind(&data.time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create appointment", e)
        })
    }

    /// List a patient's appointments joined with doctor name and specialty.
    ///
    /// LEFT JOIN: cancelled appointments may reference a deleted doctor.
    pub async fn find_for_patient(&self, patient_id: Uuid) -> AppResult<Vec<PatientAppointment>> {
        sqlx::query_as::<_, PatientAppointment>(
            "SELECT a.id, a.doctor_id, a.category, a.date, a.time, a.status, \
                    d.name AS doctor_name, d.specialty AS doctor_specialty \
             FROM appointments a \
             LEFT JOIN doctors d ON d.id = a.doctor_id \
             WHERE a.patient_id = $1 \
             ORDER BY a.date DESC, a.time DESC",
        )
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list patient appointments", e)
        })
    }

    /// List a doctor's appointments joined with patient name and problem.
    pub async fn find_for_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<DoctorAppointment>> {
        sqlx::query_as::<_, DoctorAppointment>(
            "SELECT a.id, a.patient_id, a.category, a.date, a.time, a.status, \
                    p.name AS patient_name, p.problem AS patient_problem \
             FROM appointments a \
             JOIN patients p ON p.id = a.patient_id \
             WHERE a.doctor_id = $1 \
             ORDER BY a.date DESC, a.time DESC",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list doctor appointments", e)
        })
    }

    /// Transition an appointment's status, guarded on the expected current
    /// status.
    ///
    /// The guard is in the UPDATE itself, so a row whose status changed
    /// between the caller's read and this write (e.g. cancelled by a doctor
    /// deletion) is left untouched. Returns `None` when no row matched.
    pub async fn transition_status(
        &self,
        id: Uuid,
        from: AppointmentStatus,
        to: AppointmentStatus,
    ) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $3 WHERE id = $1 AND status = $2 RETURNING *",
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update appointment status", e)
        })
    }
}
