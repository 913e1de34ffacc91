//! JWT token validation.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use medibook_core::config::AuthConfig;
use medibook_core::error::AppError;

use super::claims::Claims;

/// Validates JWT session tokens.
///
/// Verification is fully stateless: signature plus expiry. Malformed,
/// tampered, and expired tokens all yield the same error so the caller
/// cannot distinguish which check failed.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use medibook_entity::role::Role;
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_minutes: 60,
            password_min_length: 8,
            admin_email: "admin@clinic.test".to_string(),
            admin_password_hash: String::new(),
        }
    }

    #[test]
    fn test_round_trip_preserves_subject_and_role() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let subject = Uuid::new_v4();
        let issued = encoder.issue(subject, Role::Doctor).unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, subject);
        assert_eq!(claims.role, Role::Doctor);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_admin_token_uses_nil_subject() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let issued = encoder.issue(Uuid::nil(), Role::Admin).unwrap();
        let claims = decoder.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, Uuid::nil());
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Patient,
            iat: now - 7200,
            exp: now - 3600, // expired an hour ago, well past leeway
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert_eq!(err.message, "Invalid or expired token");
    }

    #[test]
    fn test_wrong_secret_rejected_with_same_error() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let mut other = test_config();
        other.jwt_secret = "different-secret".to_string();
        let decoder = JwtDecoder::new(&other);

        let issued = encoder.issue(Uuid::new_v4(), Role::Patient).unwrap();
        let err = decoder.decode(&issued.token).unwrap_err();
        assert_eq!(err.message, "Invalid or expired token");
    }

    #[test]
    fn test_garbage_token_rejected_with_same_error() {
        let decoder = JwtDecoder::new(&test_config());
        let err = decoder.decode("not-a-jwt").unwrap_err();
        assert_eq!(err.message, "Invalid or expired token");
    }
}
