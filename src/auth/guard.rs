/**
 * Session Guard
 *
 * Orchestrates the auth core to answer, for each protected route, "who is
 * making this request, and may they act on this resource?". Three
 * authentication patterns are supported, each terminal on first failure:
 *
 * 1. **Access-token auth** - bearer header → JWT verification → user id.
 * 2. **Refresh-token auth** - bearer header → store lookup → validity rule
 *    → user id (or just the token string, for revocation).
 * 3. **API-key auth** - ApiKey header → constant-time comparison against the
 *    configured key. No identity is produced; this is a service call.
 *
 * On top of authentication, `authorize_owner` checks resource ownership and
 * classifies a mismatch as `Forbidden` - distinct from `Unauthorized`, which
 * always means the credential itself was unacceptable.
 *
 * The guard holds only read-only configuration captured at startup (secrets
 * and TTLs), so a single instance is shared freely across request tasks.
 */

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::extract::{api_key, bearer_token};
use crate::auth::refresh::make_refresh_token;
use crate::auth::sessions::{make_jwt, validate_jwt};
use crate::auth::store::RefreshTokenStore;
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// The token pair minted at login
#[derive(Debug)]
pub struct SessionTokens {
    /// Short-lived signed access token
    pub access_token: String,
    /// Long-lived opaque refresh token (already persisted)
    pub refresh_token: String,
}

/// Authentication and authorization orchestrator
///
/// Constructed once from the immutable `AppConfig` and cloned into the
/// application state. Holds no mutable state.
#[derive(Clone)]
pub struct SessionGuard {
    jwt_secret: String,
    polka_key: String,
    access_token_ttl: Duration,
    refresh_token_ttl: Duration,
}

impl SessionGuard {
    /// Build a guard from the startup configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            polka_key: config.polka_key.clone(),
            access_token_ttl: config.access_token_ttl,
            refresh_token_ttl: config.refresh_token_ttl,
        }
    }

    /// Authenticate a request bearing an access token
    ///
    /// Extracts the bearer token and verifies it. Every failure - missing
    /// header, wrong scheme, bad signature, expiry, malformed subject -
    /// comes back as `ApiError::Unauthorized` without further distinction.
    pub fn authenticate_bearer(&self, headers: &HeaderMap) -> Result<Uuid, ApiError> {
        let token = bearer_token(headers)?;
        let user_id = validate_jwt(&token, &self.jwt_secret)?;
        Ok(user_id)
    }

    /// Authenticate a request bearing a refresh token
    ///
    /// Extracts the bearer token, looks its record up in the store, and
    /// applies the validity rule (unrevoked AND unexpired). Returns the
    /// owning user id on success; an unknown, revoked, or expired token is
    /// `Unauthorized`.
    pub async fn authenticate_refresh<S: RefreshTokenStore>(
        &self,
        headers: &HeaderMap,
        store: &S,
    ) -> Result<Uuid, ApiError> {
        let token = bearer_token(headers)?;

        let record = store
            .fetch_refresh_token(&token)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        if !record.is_valid(Utc::now()) {
            return Err(ApiError::Unauthorized);
        }

        Ok(record.user_id)
    }

    /// Extract the refresh token itself from a request
    ///
    /// Revocation needs the token string, not an identity; validity is
    /// settled by the store when the revoke is applied.
    pub fn refresh_token_from_request(&self, headers: &HeaderMap) -> Result<String, ApiError> {
        Ok(bearer_token(headers)?)
    }

    /// Authenticate a service-to-service request by API key
    ///
    /// The key is compared against the configured key in constant time.
    /// No identity is produced.
    pub fn authenticate_api_key(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let presented = api_key(headers)?;

        if !constant_time_eq(presented.as_bytes(), self.polka_key.as_bytes()) {
            return Err(ApiError::Unauthorized);
        }

        Ok(())
    }

    /// Check that an authenticated identity owns a resource
    ///
    /// A mismatch is `Forbidden`: the caller proved who they are, they just
    /// may not touch this resource.
    pub fn authorize_owner(&self, owner: Uuid, identity: Uuid) -> Result<(), ApiError> {
        if owner != identity {
            return Err(ApiError::Forbidden(
                "you are not the owner of this resource".to_string(),
            ));
        }

        Ok(())
    }

    /// Mint an access token for a user
    pub fn mint_access_token(&self, user_id: Uuid) -> Result<String, ApiError> {
        Ok(make_jwt(user_id, &self.jwt_secret, self.access_token_ttl)?)
    }

    /// Mint and persist a full session token pair (login path)
    ///
    /// Issues an access token, generates a refresh token, and stores the
    /// refresh token with its expiry before returning both.
    pub async fn issue_session<S: RefreshTokenStore>(
        &self,
        user_id: Uuid,
        store: &S,
    ) -> Result<SessionTokens, ApiError> {
        let access_token = make_jwt(user_id, &self.jwt_secret, self.access_token_ttl)?;
        let refresh_token = make_refresh_token()?;

        let expires_at = Utc::now() + self.refresh_token_ttl;
        store
            .store_refresh_token(&refresh_token, user_id, expires_at)
            .await?;

        Ok(SessionTokens {
            access_token,
            refresh_token,
        })
    }
}

/// Constant-time byte-slice equality
///
/// XOR-folds the two slices so the comparison time does not depend on where
/// the first difference sits. Length mismatch still returns early; the
/// length of the configured key is not a secret.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    fn test_guard() -> SessionGuard {
        SessionGuard {
            jwt_secret: "test-secret".to_string(),
            polka_key: "test-polka-key".to_string(),
            access_token_ttl: Duration::hours(1),
            refresh_token_ttl: Duration::days(60),
        }
    }

    fn headers_with(value: String) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_auth_round_trip() {
        let guard = test_guard();
        let user_id = Uuid::new_v4();
        let token = guard.mint_access_token(user_id).unwrap();

        let identity = guard
            .authenticate_bearer(&headers_with(format!("Bearer {token}")))
            .unwrap();
        assert_eq!(identity, user_id);
    }

    #[test]
    fn test_bearer_auth_rejects_garbage_as_unauthorized() {
        let guard = test_guard();
        let result = guard.authenticate_bearer(&headers_with("Bearer nonsense".to_string()));
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_bearer_auth_rejects_missing_header_as_unauthorized() {
        let guard = test_guard();
        let result = guard.authenticate_bearer(&HeaderMap::new());
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_api_key_accepted() {
        let guard = test_guard();
        let result = guard.authenticate_api_key(&headers_with("ApiKey test-polka-key".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_wrong_api_key_rejected() {
        let guard = test_guard();
        let result = guard.authenticate_api_key(&headers_with("ApiKey wrong-key".to_string()));
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_api_key_rejects_bearer_scheme() {
        let guard = test_guard();
        let result =
            guard.authenticate_api_key(&headers_with("Bearer test-polka-key".to_string()));
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_owner_match_is_authorized() {
        let guard = test_guard();
        let user_id = Uuid::new_v4();
        assert!(guard.authorize_owner(user_id, user_id).is_ok());
    }

    #[test]
    fn test_owner_mismatch_is_forbidden_not_unauthorized() {
        let guard = test_guard();
        let result = guard.authorize_owner(Uuid::new_v4(), Uuid::new_v4());
        assert!(matches!(result, Err(ApiError::Forbidden(_))));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
