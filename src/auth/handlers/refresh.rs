/**
 * Refresh and Revoke Handlers
 *
 * POST /api/refresh exchanges a valid refresh token for a new access token.
 * POST /api/revoke permanently retires a refresh token.
 *
 * Both endpoints read the refresh token from the `Authorization: Bearer`
 * header; neither takes a request body.
 */

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::Json};

use crate::auth::handlers::types::RefreshResponse;
use crate::auth::store::RefreshTokenStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Refresh handler
///
/// Validates the presented refresh token against its stored record (must be
/// unrevoked and unexpired) and mints a fresh access token for the owning
/// user. The refresh token itself is left untouched and can be used again
/// until it expires or is revoked.
///
/// # Errors
///
/// * `401 Unauthorized` - missing, unknown, revoked, or expired refresh token
/// * `500 Internal Server Error` - signing or database failure
pub async fn refresh_access_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, ApiError> {
    let user_id = state
        .guard
        .authenticate_refresh(&headers, &state.db_pool)
        .await?;

    let token = state.guard.mint_access_token(user_id)?;

    tracing::debug!("Access token refreshed for user {}", user_id);

    Ok(Json(RefreshResponse { token }))
}

/// Revoke handler
///
/// Marks the presented refresh token revoked. The record is kept, so a
/// second revoke of the same token finds nothing revocable and fails -
/// classified as 401 like every other bad-credential outcome on this
/// endpoint.
///
/// # Errors
///
/// * `401 Unauthorized` - missing header, unknown token, or already revoked
/// * `500 Internal Server Error` - database failure
pub async fn revoke_refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = state.guard.refresh_token_from_request(&headers)?;

    state
        .db_pool
        .revoke_refresh_token(&token)
        .await
        .map_err(|err| match err {
            ApiError::NotFound(_) => ApiError::Unauthorized,
            other => other,
        })?;

    tracing::debug!("Refresh token revoked");

    Ok(StatusCode::NO_CONTENT)
}
