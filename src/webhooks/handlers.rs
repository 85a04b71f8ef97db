/**
 * Polka Webhook Handler
 *
 * POST /api/polka/webhooks receives payment events from the Polka billing
 * service. This is a service-to-service call gated by a static API key in
 * the `Authorization: ApiKey <key>` header - no user session is involved.
 *
 * Only `user.upgraded` events change anything; every other event type is
 * acknowledged with 204 so Polka stops retrying it.
 */

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::store::CredentialStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Webhook payload
#[derive(Deserialize, Debug)]
pub struct UpgradeRequest {
    /// Event type, e.g. `"user.upgraded"`
    pub event: String,
    pub data: UpgradeData,
}

/// Event payload body
#[derive(Deserialize, Debug)]
pub struct UpgradeData {
    /// Affected user id, as a string so a bad value is a 400 rather than a
    /// body-rejection
    pub user_id: String,
}

/// Polka webhook handler
///
/// # Errors
///
/// * `400 Bad Request` - `user_id` is not a valid UUID
/// * `401 Unauthorized` - missing or wrong API key
/// * `404 Not Found` - no user with this id
/// * `500 Internal Server Error` - database failure
pub async fn polka_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpgradeRequest>,
) -> Result<StatusCode, ApiError> {
    state.guard.authenticate_api_key(&headers)?;

    if request.event != "user.upgraded" {
        tracing::debug!("Ignoring webhook event: {}", request.event);
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = Uuid::parse_str(&request.data.user_id)
        .map_err(|_| ApiError::Validation("Invalid UUID format".to_string()))?;

    state.db_pool.upgrade_credential(user_id).await?;

    tracing::info!("User {} upgraded to Chirpy Red", user_id);

    Ok(StatusCode::NO_CONTENT)
}
