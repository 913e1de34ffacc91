//! Patient entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered patient.
///
/// Patients are created at registration and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    /// Unique patient identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address (unique, login identity).
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Free-text description of the presenting problem.
    pub problem: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the patient registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatient {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Presenting problem.
    pub problem: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
