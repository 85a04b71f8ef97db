/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate that email and password are present
 * 2. Hash the password with bcrypt
 * 3. Create the user; a duplicate email surfaces as 409 Conflict
 *
 * Unlike login, signup does not mint tokens; a fresh account logs in
 * explicitly.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{CreateUserRequest, UserResponse};
use crate::auth::passwords::hash_password;
use crate::auth::store::CredentialStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Create-user handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password is empty
/// * `409 Conflict` - a user with this email already exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let hashed_password = hash_password(&request.password)?;

    let credential = state
        .db_pool
        .create_credential(&request.email, &hashed_password)
        .await?;

    tracing::info!("User created: {}", credential.email);

    Ok((StatusCode::CREATED, Json(UserResponse::from(credential))))
}
