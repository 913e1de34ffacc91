//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use medibook_core::error::AppError;
use medibook_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated session context available in handlers.
///
/// This is the session guard: presence of this extractor on a handler makes
/// the endpoint require a valid bearer token. Role checks happen separately
/// per endpoint.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing authentication token")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing authentication token")))?;

        // Decode and validate the JWT; signature and expiry failures are
        // indistinguishable to the caller.
        let claims = state.jwt_decoder.decode(token).map_err(ApiError)?;

        Ok(AuthUser(RequestContext::new(claims.sub, claims.role)))
    }
}
