//! Role guards for route handlers.
//!
//! The session guard only proves *who* is calling; each protected endpoint
//! must independently check *which role* it accepts.

use medibook_core::error::AppError;
use medibook_entity::role::Role;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Checks that the authenticated caller is the administrator.
pub fn require_admin(auth: &AuthUser) -> Result<(), ApiError> {
    if auth.role != Role::Admin {
        return Err(ApiError(AppError::forbidden("Access denied")));
    }
    Ok(())
}

/// Checks that the authenticated caller is a doctor.
pub fn require_doctor(auth: &AuthUser) -> Result<(), ApiError> {
    if auth.role != Role::Doctor {
        return Err(ApiError(AppError::forbidden("Access denied")));
    }
    Ok(())
}

/// Checks that the authenticated caller is a patient.
pub fn require_patient(auth: &AuthUser) -> Result<(), ApiError> {
    if auth.role != Role::Patient {
        return Err(ApiError(AppError::forbidden("Access denied")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medibook_service::context::RequestContext;
    use uuid::Uuid;

    fn auth(role: Role) -> AuthUser {
        AuthUser(RequestContext::new(Uuid::new_v4(), role))
    }

    #[test]
    fn test_role_guards() {
        assert!(require_admin(&auth(Role::Admin)).is_ok());
        assert!(require_admin(&auth(Role::Doctor)).is_err());
        assert!(require_doctor(&auth(Role::Doctor)).is_ok());
        assert!(require_doctor(&auth(Role::Patient)).is_err());
        assert!(require_patient(&auth(Role::Patient)).is_ok());
        assert!(require_patient(&auth(Role::Admin)).is_err());
    }
}
