/**
 * Credential and Refresh-Token Stores
 *
 * Narrow interfaces over the persistence the auth subsystem depends on.
 * The production implementations live on `sqlx::PgPool` (`users.rs` for
 * credentials, `refresh.rs` for refresh tokens); tests substitute in-memory
 * implementations so the full session lifecycle can run without a database.
 *
 * The auth core decides *validity*; the stores only hold state. Any locking
 * or transaction discipline (e.g. atomic fetch-and-check on a refresh-token
 * record) belongs to the store implementation, not the core.
 */

use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// A stored user credential
///
/// The `hashed_password` field holds the bcrypt digest only - never a raw
/// password. This type deliberately does not implement `Serialize`; response
/// DTOs copy out the public fields instead, so the digest cannot leak into a
/// response body by accident.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Credential {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// bcrypt digest of the user's password
    pub hashed_password: String,
    /// Whether the user has been upgraded to Chirpy Red
    pub is_chirpy_red: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// A stored refresh-token record
///
/// The token string itself is the lookup key and is not repeated here.
/// Records are never deleted, only marked revoked, so the table doubles as
/// an audit trail.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    /// The user this token belongs to
    pub user_id: Uuid,
    /// Hard expiry; the token is dead past this instant regardless of state
    pub expires_at: DateTime<Utc>,
    /// Set when the token is revoked; unset means still active
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshTokenRecord {
    /// Apply the validity rule: a refresh token is valid iff it has not been
    /// revoked and has not expired.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

/// Store of user credentials
///
/// A unique-email violation on `create_credential` surfaces as
/// `ApiError::Conflict`; lookups return `None` rather than an error when
/// nothing matches.
pub trait CredentialStore: Send + Sync {
    /// Look up a credential by email
    fn find_credential_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Credential>, ApiError>> + Send;

    /// Look up a credential by user id
    fn find_credential_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Credential>, ApiError>> + Send;

    /// Create a credential; fails with `Conflict` on a duplicate email
    fn create_credential(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> impl Future<Output = Result<Credential, ApiError>> + Send;

    /// Replace a user's email and password hash
    fn update_credential(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> impl Future<Output = Result<Credential, ApiError>> + Send;

    /// Mark a user as Chirpy Red; fails with `NotFound` for an unknown id
    fn upgrade_credential(&self, id: Uuid) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Delete every credential (dev-platform reset)
    fn delete_all_credentials(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Store of refresh-token records
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a freshly issued token
    fn store_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Fetch the record for a token, if one exists
    fn fetch_refresh_token(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<RefreshTokenRecord>, ApiError>> + Send;

    /// Mark a token revoked. Fails with `NotFound` when the token is unknown
    /// or already revoked; the record itself is kept.
    fn revoke_refresh_token(&self, token: &str)
        -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_active_record_is_valid() {
        let record = RefreshTokenRecord {
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::days(60),
            revoked_at: None,
        };
        assert!(record.is_valid(Utc::now()));
    }

    #[test]
    fn test_revoked_record_is_invalid_even_before_expiry() {
        let record = RefreshTokenRecord {
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::days(60),
            revoked_at: Some(Utc::now()),
        };
        assert!(!record.is_valid(Utc::now()));
    }

    #[test]
    fn test_expired_record_is_invalid_even_if_unrevoked() {
        let record = RefreshTokenRecord {
            user_id: Uuid::new_v4(),
            expires_at: Utc::now() - Duration::seconds(1),
            revoked_at: None,
        };
        assert!(!record.is_valid(Utc::now()));
    }
}
