//! # medibook-entity
//!
//! Domain entity models for MediBook. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod role;

pub use appointment::{Appointment, AppointmentStatus};
pub use doctor::Doctor;
pub use patient::Patient;
pub use role::Role;
