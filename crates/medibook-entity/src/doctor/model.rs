//! Doctor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered doctor.
///
/// Doctors are created at registration and removed by the administrator,
/// which cancels their pending appointments as part of the same deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    /// Unique doctor identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address (unique, login identity).
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Medical specialty.
    pub specialty: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the doctor registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctor {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Contact phone number.
    pub mobile: String,
    /// Medical specialty.
    pub specialty: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
