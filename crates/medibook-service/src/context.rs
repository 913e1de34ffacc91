//! Request context carrying the authenticated identity and role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medibook_core::error::AppError;
use medibook_entity::role::Role;

/// Context for the current authenticated request.
///
/// Extracted from the session token and passed into service methods so that
/// every operation knows *who* is acting and in *which* role. The subject id
/// is the nil UUID for the administrator, who is not a stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated subject's ID (patient or doctor; nil for admin).
    pub subject_id: Uuid,
    /// The role the session token was issued for.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(subject_id: Uuid, role: Role) -> Self {
        Self {
            subject_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current caller is the administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Fails with `Forbidden` unless the caller holds the given role.
    pub fn require_role(&self, role: Role) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::forbidden("Access denied"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role() {
        let ctx = RequestContext::new(Uuid::new_v4(), Role::Doctor);
        assert!(ctx.require_role(Role::Doctor).is_ok());
        assert!(ctx.require_role(Role::Admin).is_err());
        assert!(!ctx.is_admin());
    }
}
