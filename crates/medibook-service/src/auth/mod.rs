//! Credential registration and login.

pub mod service;

pub use service::{AuthService, RegisterDoctor, RegisterPatient};
