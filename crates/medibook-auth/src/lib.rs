//! # medibook-auth
//!
//! Authentication primitives for MediBook.
//!
//! ## Modules
//!
//! - `jwt` — stateless session token creation and validation
//! - `password` — Argon2id password hashing and verification
//! - `admin` — the single configured administrator credential

pub mod admin;
pub mod jwt;
pub mod password;

pub use admin::AdminCredential;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
