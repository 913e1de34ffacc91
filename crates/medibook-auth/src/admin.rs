//! The single configured administrator credential.

use medibook_core::config::AuthConfig;
use medibook_core::error::AppError;

use crate::password::PasswordHasher;

/// The clinic's administrator identity.
///
/// There is exactly one admin and it is not a database record: the email and
/// a pre-computed Argon2id hash come from the `auth` configuration section,
/// loaded once at process start. There is no registration path for it.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    email: String,
    password_hash: String,
    hasher: PasswordHasher,
}

impl AdminCredential {
    /// Builds the admin credential from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            email: config.admin_email.clone(),
            password_hash: config.admin_password_hash.clone(),
            hasher: PasswordHasher::new(),
        }
    }

    /// Verifies an admin login attempt.
    ///
    /// A wrong email and a wrong password fail identically so the caller
    /// cannot learn which factor was incorrect.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), AppError> {
        if !email.eq_ignore_ascii_case(&self.email) {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let matches = self.hasher.verify_password(password, &self.password_hash)?;
        if !matches {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> AdminCredential {
        let hasher = PasswordHasher::new();
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            password_min_length: 8,
            admin_email: "admin@clinic.test".to_string(),
            admin_password_hash: hasher.hash_password("admin-pass").unwrap(),
        };
        AdminCredential::new(&config)
    }

    #[test]
    fn test_correct_credentials_accepted() {
        assert!(credential().verify("admin@clinic.test", "admin-pass").is_ok());
        // Email comparison is case-insensitive.
        assert!(credential().verify("Admin@Clinic.Test", "admin-pass").is_ok());
    }

    #[test]
    fn test_wrong_email_and_wrong_password_fail_identically() {
        let cred = credential();
        let wrong_email = cred.verify("nobody@clinic.test", "admin-pass").unwrap_err();
        let wrong_password = cred.verify("admin@clinic.test", "nope").unwrap_err();
        assert_eq!(wrong_email.message, wrong_password.message);
        assert_eq!(wrong_email.kind, wrong_password.kind);
    }
}
