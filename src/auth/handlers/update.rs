/**
 * Update User Handler
 *
 * This module implements the credential-update handler for PUT /api/users.
 * The caller proves their identity with an access token and replaces their
 * email and password in one shot.
 */

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::handlers::types::{UpdateUserRequest, UserResponse};
use crate::auth::passwords::hash_password;
use crate::auth::store::CredentialStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Update-user handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password is empty
/// * `401 Unauthorized` - missing or invalid access token
/// * `404 Not Found` - the authenticated user no longer exists
/// * `500 Internal Server Error` - hashing or database failure
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = state.guard.authenticate_bearer(&headers)?;

    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let hashed_password = hash_password(&request.password)?;

    let credential = state
        .db_pool
        .update_credential(user_id, &request.email, &hashed_password)
        .await?;

    tracing::info!("User updated: {}", user_id);

    Ok(Json(UserResponse::from(credential)))
}
