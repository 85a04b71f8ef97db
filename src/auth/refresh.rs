/**
 * Refresh Tokens
 *
 * This module generates opaque refresh tokens and implements their Postgres
 * persistence. A refresh token is 32 bytes from the OS random source,
 * hex-encoded to 64 characters; unlike access tokens it carries no claims
 * at all - everything about its lifecycle (owner, expiry, revocation) lives
 * in the `refresh_tokens` table.
 *
 * Revocation marks the record rather than deleting it, so revoked tokens
 * remain visible for auditing and a second revoke of the same token fails.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::error::AuthError;
use crate::auth::store::{RefreshTokenRecord, RefreshTokenStore};
use crate::error::ApiError;

/// Number of random bytes in a refresh token (64 hex characters)
const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate a new opaque refresh token
///
/// Draws 32 bytes from the OS cryptographically secure random source and
/// hex-encodes them.
///
/// # Errors
///
/// Returns `AuthError::Entropy` only if the underlying random source fails.
pub fn make_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    getrandom::fill(&mut bytes)?;
    Ok(hex::encode(bytes))
}

impl RefreshTokenStore for PgPool {
    async fn store_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, expires_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .bind(now)
        .bind(now)
        .execute(self)
        .await?;

        Ok(())
    }

    async fn fetch_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, ApiError> {
        let record = sqlx::query_as::<_, RefreshTokenRecord>(
            r#"
            SELECT user_id, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(self)
        .await?;

        Ok(record)
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<(), ApiError> {
        // A second revoke of the same token matches no rows.
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = $1, updated_at = $1
            WHERE token = $2 AND revoked_at IS NULL
            "#,
        )
        .bind(Utc::now())
        .bind(token)
        .execute(self)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("refresh token not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_is_64_hex_chars() {
        let token = make_refresh_token().unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_refresh_tokens_are_unique() {
        let first = make_refresh_token().unwrap();
        let second = make_refresh_token().unwrap();
        assert_ne!(first, second);
    }
}
