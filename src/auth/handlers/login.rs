/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Mint an access token and a refresh token; the refresh token is
 *    persisted before either is returned
 *
 * # Security
 *
 * - Unknown email and wrong password produce the identical 401 response,
 *   so callers cannot probe which emails are registered
 * - Passwords are never logged or echoed back
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::passwords::verify_password;
use crate::auth::store::CredentialStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password is empty
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - hashing, signing, or database failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let credential = state
        .db_pool
        .find_credential_by_email(&request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown email");
            ApiError::Unauthorized
        })?;

    let valid = verify_password(&request.password, &credential.hashed_password)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", credential.email);
        return Err(ApiError::Unauthorized);
    }

    let tokens = state
        .guard
        .issue_session(credential.id, &state.db_pool)
        .await?;

    tracing::info!("User logged in: {}", credential.email);

    Ok(Json(LoginResponse {
        id: credential.id,
        created_at: credential.created_at,
        updated_at: credential.updated_at,
        email: credential.email,
        is_chirpy_red: credential.is_chirpy_red,
        token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    }))
}
