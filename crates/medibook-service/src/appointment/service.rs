//! Appointment booking, listing, and status transitions.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use medibook_core::error::AppError;
use medibook_database::repositories::appointment::AppointmentRepository;
use medibook_database::repositories::doctor::DoctorRepository;
use medibook_entity::appointment::{
    Appointment, AppointmentStatus, CreateAppointment, DoctorAppointment, PatientAppointment,
};

use crate::context::RequestContext;

/// Category stored when the booking request omits one.
const DEFAULT_CATEGORY: &str = "General";

/// Handles the appointment lifecycle for patients and doctors.
#[derive(Debug, Clone)]
pub struct AppointmentService {
    /// Appointment repository.
    appointment_repo: Arc<AppointmentRepository>,
    /// Doctor repository, for referential validation at booking time.
    doctor_repo: Arc<DoctorRepository>,
}

/// Data for booking an appointment.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BookAppointment {
    /// The doctor to book with.
    pub doctor_id: Uuid,
    /// Visit category; defaults to "General" when omitted.
    pub category: Option<String>,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day ("09:00").
    pub time: String,
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(
        appointment_repo: Arc<AppointmentRepository>,
        doctor_repo: Arc<DoctorRepository>,
    ) -> Self {
        Self {
            appointment_repo,
            doctor_repo,
        }
    }

    /// Books an appointment for the calling patient.
    ///
    /// The doctor must exist at booking time. Nothing prevents two patients
    /// from booking the same doctor and slot — slot conflict detection is
    /// out of scope.
    pub async fn book(
        &self,
        ctx: &RequestContext,
        req: BookAppointment,
    ) -> Result<Appointment, AppError> {
        if self.doctor_repo.find_by_id(req.doctor_id).await?.is_none() {
            return Err(AppError::not_found("Doctor not found"));
        }

        if req.time.trim().is_empty() {
            return Err(AppError::validation("Date and time are required"));
        }

        let category = match req.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let appointment = self
            .appointment_repo
            .create(&CreateAppointment {
                patient_id: ctx.subject_id,
                doctor_id: req.doctor_id,
                category,
                date: req.date,
                time: req.time,
            })
            .await?;

        info!(
            appointment_id = %appointment.id,
            patient_id = %ctx.subject_id,
            doctor_id = %req.doctor_id,
            "Appointment booked"
        );
        Ok(appointment)
    }

    /// Lists the calling patient's appointment history with doctor details.
    pub async fn history_for_patient(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<PatientAppointment>, AppError> {
        self.appointment_repo.find_for_patient(ctx.subject_id).await
    }

    /// Lists the calling doctor's appointments with patient details.
    pub async fn appointments_for_doctor(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<DoctorAppointment>, AppError> {
        self.appointment_repo.find_for_doctor(ctx.subject_id).await
    }

    /// Transitions an appointment's status on behalf of its assigned doctor.
    ///
    /// Only the assigned doctor may transition, and only along the legal
    /// edges `pending -> completed` and `pending -> cancelled`.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        appointment_id: Uuid,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let appointment = self
            .appointment_repo
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found"))?;

        if appointment.doctor_id != ctx.subject_id {
            return Err(AppError::forbidden("Access denied"));
        }

        if !appointment.status.can_transition_to(new_status) {
            return Err(AppError::validation(format!(
                "Invalid status transition: {} -> {}",
                appointment.status, new_status
            )));
        }

        // The write is guarded on the status read above; a concurrent change
        // (e.g. a doctor-deletion cascade cancelling the row) matches zero
        // rows and surfaces as an invalid transition rather than silently
        // overwriting a terminal state.
        let updated = self
            .appointment_repo
            .transition_status(appointment_id, appointment.status, new_status)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid status transition: {} -> {}",
                    appointment.status, new_status
                ))
            })?;

        info!(
            appointment_id = %appointment_id,
            status = %new_status,
            "Appointment status updated"
        );
        Ok(updated)
    }
}
