//! Appointment entity model and read projections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AppointmentStatus;

/// A booked appointment between a patient and a doctor.
///
/// The appointment owns neither party; it is a many-to-one association to
/// each. Appointments are never physically deleted — only their status
/// changes. `doctor_id` is validated at creation time but carries no foreign
/// key, so the row survives deletion of its doctor (the cascade cancels it
/// instead).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The booking patient.
    pub patient_id: Uuid,
    /// The assigned doctor.
    pub doctor_id: Uuid,
    /// Visit category (defaults to "General").
    pub category: String,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day, as entered ("09:00").
    pub time: String,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// When the appointment was booked.
    pub created_at: DateTime<Utc>,
}

/// Data required to book a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointment {
    /// The booking patient.
    pub patient_id: Uuid,
    /// The assigned doctor.
    pub doctor_id: Uuid,
    /// Visit category.
    pub category: String,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day.
    pub time: String,
}

/// An appointment as seen by its patient, joined with doctor details.
///
/// The doctor fields are optional because the doctor may have been deleted
/// after the appointment was cancelled by the cascade.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PatientAppointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The assigned doctor.
    pub doctor_id: Uuid,
    /// Visit category.
    pub category: String,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day.
    pub time: String,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Doctor's name, if the doctor still exists.
    pub doctor_name: Option<String>,
    /// Doctor's specialty, if the doctor still exists.
    pub doctor_specialty: Option<String>,
}

/// An appointment as seen by its doctor, joined with patient details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DoctorAppointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// The booking patient.
    pub patient_id: Uuid,
    /// Visit category.
    pub category: String,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day.
    pub time: String,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Patient's name.
    pub patient_name: String,
    /// Patient's presenting problem.
    pub patient_problem: String,
}
