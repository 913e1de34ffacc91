//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medibook_entity::appointment::{Appointment, DoctorAppointment, PatientAppointment};
use medibook_entity::doctor::Doctor;

/// Token response returned by every successful registration and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Doctor summary for directory and admin listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorResponse {
    /// Doctor ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Specialty.
    pub specialty: String,
}

impl From<Doctor> for DoctorResponse {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name,
            email: doctor.email,
            mobile: doctor.mobile,
            specialty: doctor.specialty,
        }
    }
}

/// Doctor directory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorListResponse {
    /// Doctors.
    pub doctors: Vec<DoctorResponse>,
}

/// A single appointment in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    /// Appointment ID.
    pub id: Uuid,
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
    /// Lifecycle status.
    pub status: String,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            patient_id: a.patient_id,
            doctor_id: a.doctor_id,
            category: a.category,
            date: a.date,
            time: a.time,
            status: a.status.to_string(),
        }
    }
}

/// Booking confirmation: message plus the created appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Confirmation message.
    pub message: String,
    /// The created appointment.
    pub appointment: AppointmentResponse,
}

/// A patient's appointment history entry, joined with doctor details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientAppointmentResponse {
    /// Appointment ID.
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
    pub status: String,
    /// Doctor's name (absent if the doctor was deleted).
    pub doctor_name: Option<String>,
    /// Doctor's specialty (absent if the doctor was deleted).
    pub doctor_specialty: Option<String>,
}

impl From<PatientAppointment> for PatientAppointmentResponse {
    fn from(a: PatientAppointment) -> Self {
        Self {
            id: a.id,
            doctor_id: a.doctor_id,
            category: a.category,
            date: a.date,
            time: a.time,
            status: a.status.to_string(),
            doctor_name: a.doctor_name,
            doctor_specialty: a.doctor_specialty,
        }
    }
}

/// A doctor's appointment entry, joined with patient details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorAppointmentResponse {
    /// Appointment ID.
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
    pub status: String,
    /// Patient's name.
    pub patient_name: String,
    /// Patient's presenting problem.
    pub patient_problem: String,
}

impl From<DoctorAppointment> for DoctorAppointmentResponse {
    fn from(a: DoctorAppointment) -> Self {
        Self {
            id: a.id,
            patient_id: a.patient_id,
            category: a.category,
            date: a.date,
            time: a.time,
            status: a.status.to_string(),
            patient_name: a.patient_name,
            patient_problem: a.patient_problem,
        }
    }
}

/// Appointment listing wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse<T: Serialize> {
    /// Appointments.
    pub appointments: Vec<T>,
}
