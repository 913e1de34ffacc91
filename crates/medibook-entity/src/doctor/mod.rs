//! Doctor entity.

pub mod model;

pub use model::{CreateDoctor, Doctor};
