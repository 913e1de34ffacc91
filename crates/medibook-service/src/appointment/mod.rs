//! Appointment lifecycle — booking, listing, status transitions.

pub mod service;

pub use service::{AppointmentService, BookAppointment};
