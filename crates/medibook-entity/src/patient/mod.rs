//! Patient entity.

pub mod model;

pub use model::{CreatePatient, Patient};
