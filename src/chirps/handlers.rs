/**
 * Chirp Handlers
 *
 * HTTP handlers for chirp CRUD. Reads are public; creation requires a valid
 * access token, and deletion additionally requires that the authenticated
 * user owns the chirp - a foreign chirp yields 403, never 401.
 */

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::chirps::db::{
    create_chirp as insert_chirp, delete_chirp_by_id, get_all_chirps, get_chirp_by_id, Chirp,
};
use crate::chirps::filter::clean_body;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Maximum chirp length in bytes
const MAX_CHIRP_LENGTH: usize = 140;

/// Create-chirp request
#[derive(Deserialize, Debug)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Chirp response
#[derive(Serialize, Debug)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

/// Create-chirp handler
///
/// The body is rejected past 140 bytes and profanity-cleaned before storage.
///
/// # Errors
///
/// * `400 Bad Request` - chirp is too long
/// * `401 Unauthorized` - missing or invalid access token
/// * `500 Internal Server Error` - database failure
pub async fn create_chirp(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), ApiError> {
    let user_id = state.guard.authenticate_bearer(&headers)?;

    if request.body.len() > MAX_CHIRP_LENGTH {
        return Err(ApiError::Validation("Chirp is too long".to_string()));
    }

    let cleaned = clean_body(&request.body);

    let chirp = insert_chirp(&state.db_pool, &cleaned, user_id).await?;

    tracing::info!("Chirp created by user {}", user_id);

    Ok((StatusCode::CREATED, Json(ChirpResponse::from(chirp))))
}

/// List all chirps, oldest first
pub async fn get_chirps(State(pool): State<PgPool>) -> Result<Json<Vec<ChirpResponse>>, ApiError> {
    let chirps = get_all_chirps(&pool).await?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// Fetch a single chirp
///
/// # Errors
///
/// * `404 Not Found` - no chirp with this id
pub async fn get_chirp(
    State(pool): State<PgPool>,
    Path(chirp_id): Path<Uuid>,
) -> Result<Json<ChirpResponse>, ApiError> {
    let chirp = get_chirp_by_id(&pool, chirp_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chirp not found".to_string()))?;

    Ok(Json(ChirpResponse::from(chirp)))
}

/// Delete-chirp handler
///
/// Authenticates the caller, then checks ownership against the stored
/// chirp. The two failure classes stay distinct: a bad token is 401, a
/// valid token on someone else's chirp is 403.
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid access token
/// * `403 Forbidden` - the caller does not own this chirp
/// * `404 Not Found` - no chirp with this id
/// * `500 Internal Server Error` - database failure
pub async fn delete_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let user_id = state.guard.authenticate_bearer(&headers)?;

    let chirp = get_chirp_by_id(&state.db_pool, chirp_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chirp not found".to_string()))?;

    state.guard.authorize_owner(chirp.user_id, user_id)?;

    delete_chirp_by_id(&state.db_pool, chirp_id).await?;

    tracing::info!("Chirp {} deleted by user {}", chirp_id, user_id);

    Ok(StatusCode::NO_CONTENT)
}
