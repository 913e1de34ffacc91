//! Appointment entity and status state machine.

pub mod model;
pub mod status;

pub use model::{Appointment, CreateAppointment, DoctorAppointment, PatientAppointment};
pub use status::AppointmentStatus;
