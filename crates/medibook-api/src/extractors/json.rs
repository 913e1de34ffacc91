//! JSON body extractor whose rejection uses the standard error shape.
//!
//! Axum's default `Json` rejection is a plain-text response; this wrapper
//! routes malformed or missing bodies through the same `{error, message}`
//! mapping as every other failure.

use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use medibook_core::error::AppError;

use crate::error::ApiError;

/// Drop-in replacement for `axum::Json` in handler signatures.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Json(value)),
            Err(rejection) => Err(ApiError(AppError::validation(rejection.body_text()))),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    use crate::dto::request::LoginRequest;

    async fn echo_email(Json(req): Json<LoginRequest>) -> String {
        req.email
    }

    fn app() -> Router {
        Router::new().route("/login", post(echo_email))
    }

    async fn post_body(body: &'static str) -> axum::response::Response {
        app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_yields_validation_shape() {
        let response = post_body("{not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_missing_field_yields_validation_shape() {
        let response = post_body(r#"{"email": "a@b.com"}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let response = post_body(r#"{"email": "a@b.com", "password": "secret"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
