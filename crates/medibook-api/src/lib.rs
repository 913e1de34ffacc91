//! # medibook-api
//!
//! HTTP API layer for MediBook built on Axum.
//!
//! Provides all REST endpoints, the session-guard extractor, role guards,
//! DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
