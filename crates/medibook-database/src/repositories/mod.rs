//! Concrete repository implementations, one per entity.

pub mod appointment;
pub mod doctor;
pub mod patient;

pub use appointment::AppointmentRepository;
pub use doctor::DoctorRepository;
pub use patient::PatientRepository;
