//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The administrator is not a database record: the clinic has exactly one
/// admin identity, supplied here as an email plus a pre-computed Argon2id
/// password hash and loaded once at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length for registrations.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Administrator login email.
    pub admin_email: String,
    /// Argon2id hash of the administrator password.
    pub admin_password_hash: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_on_partial_config() {
        let cfg: AuthConfig = serde_json::from_value(serde_json::json!({
            "admin_email": "admin@clinic.test",
            "admin_password_hash": "$argon2id$stub",
        }))
        .unwrap();
        assert_eq!(cfg.token_ttl_minutes, 60);
        assert_eq!(cfg.password_min_length, 8);
        assert_eq!(cfg.jwt_secret, "CHANGE_ME_IN_PRODUCTION");
    }
}
