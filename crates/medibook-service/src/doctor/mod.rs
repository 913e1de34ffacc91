//! Doctor directory and administration.

pub mod admin;

pub use admin::DoctorAdminService;
