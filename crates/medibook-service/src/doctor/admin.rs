//! Doctor directory listing and administrative deletion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use medibook_core::error::AppError;
use medibook_database::repositories::doctor::DoctorRepository;
use medibook_entity::doctor::Doctor;

use crate::context::RequestContext;

/// Handles the doctor directory and admin-only doctor removal.
#[derive(Debug, Clone)]
pub struct DoctorAdminService {
    /// Doctor repository.
    doctor_repo: Arc<DoctorRepository>,
}

impl DoctorAdminService {
    /// Creates a new doctor admin service.
    pub fn new(doctor_repo: Arc<DoctorRepository>) -> Self {
        Self { doctor_repo }
    }

    /// Lists all registered doctors.
    ///
    /// Serves both the public directory and the admin dashboard; password
    /// hashes never leave the entity's serialization boundary.
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        self.doctor_repo.find_all().await
    }

    /// Deletes a doctor and cancels their pending appointments.
    ///
    /// Admin only. The cancellation and the delete run in one database
    /// transaction, so no caller can observe the doctor gone while pending
    /// appointments remain. Completed and cancelled appointments are left
    /// untouched.
    pub async fn delete_doctor(
        &self,
        ctx: &RequestContext,
        doctor_id: Uuid,
    ) -> Result<u64, AppError> {
        ctx.require_role(medibook_entity::role::Role::Admin)?;

        let cancelled = self.doctor_repo.delete_with_cancellation(doctor_id).await?;

        info!(
            doctor_id = %doctor_id,
            cancelled_appointments = cancelled,
            "Doctor deleted"
        );
        Ok(cancelled)
    }
}
