//! Appointment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an appointment.
///
/// The only legal transitions are `Pending -> Completed` (marked done by the
/// assigned doctor) and `Pending -> Cancelled` (doctor deletion cascade).
/// Both target states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and awaiting the visit.
    Pending,
    /// The visit took place.
    Completed,
    /// Cancelled, e.g. because the doctor was removed.
    Cancelled,
}

impl AppointmentStatus {
    /// Check if this status admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Check whether a transition from this status to `next` is legal.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(self, Self::Pending)
            && matches!(next, Self::Completed | Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = medibook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(medibook_core::AppError::validation(format!(
                "Invalid appointment status: '{s}'. Expected one of: pending, completed, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_transitions() {
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Completed));
        assert!(AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Cancelled));
        assert!(!AppointmentStatus::Pending.can_transition_to(AppointmentStatus::Pending));
    }

    #[test]
    fn test_terminal_states_admit_nothing() {
        for terminal in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
            assert!(terminal.is_terminal());
            for next in [
                AppointmentStatus::Pending,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_cancelled_appointment_cannot_be_completed() {
        // An appointment cancelled out from under its doctor (deletion
        // cascade) must not be markable as completed afterwards.
        assert!(!AppointmentStatus::Cancelled.can_transition_to(AppointmentStatus::Completed));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "pending".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Pending
        );
        assert_eq!(
            "COMPLETED".parse::<AppointmentStatus>().unwrap(),
            AppointmentStatus::Completed
        );
        assert!("done".parse::<AppointmentStatus>().is_err());
    }
}
