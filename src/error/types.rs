/**
 * API Error Types
 *
 * This module defines the error classification used by HTTP handlers.
 * Every failure the backend can produce maps onto one of these variants,
 * and each variant maps onto exactly one HTTP status code.
 *
 * The auth core returns fine-grained `AuthError` values; those are collapsed
 * into this classification at the module boundary (see `conversion.rs`) so
 * that a response never reveals which verification step failed.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::error::AuthError;

/// Transport-facing error classification
///
/// Handlers return `Result<_, ApiError>`; the `IntoResponse` implementation
/// turns each variant into a status code plus a `{"error": ...}` JSON body.
///
/// # Classification Rules
///
/// - Missing, malformed, expired, or otherwise invalid credentials are all
///   `Unauthorized`. Callers are never told which check failed.
/// - A valid identity acting on a resource it does not own is `Forbidden`,
///   never `Unauthorized`.
/// - Internal failures (`Hashing`, `Database`, `Internal`) respond with a
///   generic message; the underlying error stays server-side.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (empty email, over-long chirp body, bad UUID)
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credential of any kind
    #[error("Unauthorized")]
    Unauthorized,

    /// Valid credential, disallowed action
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Duplicate unique field (email)
    #[error("{0}")]
    Conflict(String),

    /// Internal password-hashing failure
    #[error("Error hashing password")]
    Hashing(#[source] AuthError),

    /// Database failure. The SQL error is never surfaced to clients.
    #[error("Something went wrong")]
    Database(#[from] sqlx::Error),

    /// Any other internal failure (token signing, entropy exhaustion)
    #[error("Something went wrong")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Hashing(_) | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the user-visible error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_message_is_generic() {
        // The 401 body must not reveal which verification step failed.
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = ApiError::Internal("secret detail".into());
        assert_eq!(error.message(), "Something went wrong");
    }
}
