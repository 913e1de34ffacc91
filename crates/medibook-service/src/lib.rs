//! # medibook-service
//!
//! Business logic service layer for MediBook. Each service orchestrates
//! repositories and authentication primitives to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod appointment;
pub mod auth;
pub mod context;
pub mod doctor;

pub use appointment::AppointmentService;
pub use auth::AuthService;
pub use context::RequestContext;
pub use doctor::DoctorAdminService;
