//! JWT claims structure used in session tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medibook_entity::role::Role;

/// JWT claims payload embedded in every session token.
///
/// Tokens are opaque bearer credentials: the subject id and role issued here
/// are exactly what [`crate::jwt::JwtDecoder`] hands back to the request
/// context. There is no refresh mechanism; a token is valid until `exp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the patient or doctor ID (nil UUID for the admin).
    pub sub: Uuid,
    /// Role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
}
