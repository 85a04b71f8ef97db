/**
 * Admin Handlers
 *
 * Operational endpoints: the fileserver hit counter and the dev-only reset.
 *
 * The reset endpoint is destructive (drops every user) and therefore only
 * answers on the `dev` platform; anywhere else it is 403 regardless of who
 * asks.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::atomic::Ordering;

use crate::auth::store::CredentialStore;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Metrics response
#[derive(Serialize, Debug)]
pub struct MetricsResponse {
    /// Number of fileserver requests since startup (or the last reset)
    pub hits: i64,
}

/// Metrics handler
///
/// Reports how many times the `/app` fileserver has been hit.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let hits = state.fileserver_hits.load(Ordering::Relaxed);

    Json(MetricsResponse { hits })
}

/// Reset handler
///
/// Zeroes the hit counter and deletes all users. Only available when the
/// server runs with `PLATFORM=dev`.
///
/// # Errors
///
/// * `403 Forbidden` - the server is not running on the dev platform
/// * `500 Internal Server Error` - database failure
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    if state.config.platform != "dev" {
        tracing::warn!("Reset attempted outside the dev platform");
        return Err(ApiError::Forbidden(
            "reset is only available on the dev platform".to_string(),
        ));
    }

    state.fileserver_hits.store(0, Ordering::Relaxed);
    state.db_pool.delete_all_credentials().await?;

    tracing::info!("Hit counter and user table reset");

    Ok(StatusCode::OK)
}
