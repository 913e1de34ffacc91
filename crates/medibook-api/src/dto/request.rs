//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use medibook_entity::appointment::AppointmentStatus;

/// Login request body, shared by all three roles.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Patient registration request.
///
/// No confirmation password here — see DESIGN.md for the preserved
/// asymmetry with doctor registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPatientRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address (unique).
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
    /// Presenting problem.
    #[validate(length(min = 1, message = "Problem description is required"))]
    pub problem: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Doctor registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDoctorRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address (unique).
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
    /// Medical specialty.
    #[validate(length(min = 1, message = "Specialty is required"))]
    pub specialty: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation.
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Appointment booking request.
///
/// `date` and `time` are mandatory at the type level; an absent `category`
/// is stored as "General".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookAppointmentRequest {
    /// The doctor to book with.
    #[serde(rename = "doctorId")]
    pub doctor_id: Uuid,
    /// Visit category.
    pub category: Option<String>,
    /// Visit date.
    pub date: NaiveDate,
    /// Time of day ("09:00").
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
}

/// Appointment status update request.
///
/// The status is the closed enum, so arbitrary strings are rejected at
/// deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    /// Target status.
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_update_status_rejects_unknown_status() {
        let result: Result<UpdateAppointmentStatusRequest, _> =
            serde_json::from_str(r#"{"status": "done"}"#);
        assert!(result.is_err());

        let ok: UpdateAppointmentStatusRequest =
            serde_json::from_str(r#"{"status": "completed"}"#).unwrap();
        assert_eq!(ok.status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_book_request_requires_date_and_time() {
        let missing: Result<BookAppointmentRequest, _> = serde_json::from_str(
            r#"{"doctorId": "6e9c0a54-7e5b-4ce0-9353-b84e3a3bfb52", "category": "Dental"}"#,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
