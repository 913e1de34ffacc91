//! Route handlers organized by role.

pub mod admin;
pub mod directory;
pub mod doctor;
pub mod health;
pub mod patient;
