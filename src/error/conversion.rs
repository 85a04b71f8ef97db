/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * them to be returned directly from Axum handlers and constructed from the
 * auth core's fine-grained errors.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::auth::error::AuthError;
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The status code comes from `status_code()` and the body is a JSON
    /// object holding the user-visible message.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({
            "error": message,
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(
                |_| format!(r#"{{"error":"{}"}}"#, message),
            )))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

/// Collapse the auth core's fine-grained errors into the transport
/// classification.
///
/// Every credential failure becomes `Unauthorized` regardless of whether the
/// header was missing, the signature was bad, or the token had expired -
/// distinguishing them in a response would leak which check failed. Internal
/// crypto failures keep their own 500-class variants.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential
            | AuthError::MalformedCredential
            | AuthError::Expired
            | AuthError::InvalidToken(_)
            | AuthError::MalformedSubject => ApiError::Unauthorized,
            AuthError::Hashing(_) | AuthError::BadHash(_) => ApiError::Hashing(err),
            AuthError::Signing(_) | AuthError::Entropy(_) => ApiError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_collapse_to_unauthorized() {
        for err in [
            AuthError::MissingCredential,
            AuthError::MalformedCredential,
            AuthError::Expired,
            AuthError::MalformedSubject,
        ] {
            let api: ApiError = err.into();
            assert!(matches!(api, ApiError::Unauthorized));
        }
    }

    #[test]
    fn test_hashing_failure_is_not_unauthorized() {
        let err = bcrypt::verify("password", "not-a-bcrypt-hash")
            .expect_err("malformed hash must not verify");
        let api: ApiError = AuthError::BadHash(err).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
