/**
 * Chirp Database Operations
 *
 * This module handles chirp persistence. Plain persistence glue; all
 * authorization decisions happen in the handlers before these run.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A chirp as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Chirp {
    /// Unique chirp ID (UUID)
    pub id: Uuid,
    /// Chirp text (already profanity-cleaned, at most 140 bytes)
    pub body: String,
    /// Author's user ID
    pub user_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Insert a new chirp
pub async fn create_chirp(pool: &PgPool, body: &str, user_id: Uuid) -> Result<Chirp, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let chirp = sqlx::query_as::<_, Chirp>(
        r#"
        INSERT INTO chirps (id, body, user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, body, user_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(body)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(chirp)
}

/// Fetch all chirps, oldest first
pub async fn get_all_chirps(pool: &PgPool) -> Result<Vec<Chirp>, sqlx::Error> {
    let chirps = sqlx::query_as::<_, Chirp>(
        r#"
        SELECT id, body, user_id, created_at, updated_at
        FROM chirps
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(chirps)
}

/// Fetch a chirp by id
pub async fn get_chirp_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Chirp>, sqlx::Error> {
    let chirp = sqlx::query_as::<_, Chirp>(
        r#"
        SELECT id, body, user_id, created_at, updated_at
        FROM chirps
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(chirp)
}

/// Delete a chirp by id
pub async fn delete_chirp_by_id(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM chirps WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
