//! Middleware and per-endpoint guards.

pub mod cors;
pub mod rbac;
