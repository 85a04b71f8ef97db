//! Shared integration-test fixtures
//!
//! Provides in-memory implementations of the credential and refresh-token
//! stores so the full session lifecycle can be exercised without a live
//! database, plus helpers for building configs and auth headers.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use chirpy::auth::store::{Credential, CredentialStore, RefreshTokenRecord, RefreshTokenStore};
use chirpy::error::ApiError;
use chirpy::server::config::AppConfig;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// In-memory store implementing both store traits
///
/// Mirrors the semantics of the Postgres implementations: unique emails,
/// revocation that marks rather than deletes, and `NotFound` on revoking an
/// unknown or already-revoked token.
#[derive(Default)]
pub struct MemoryStore {
    credentials: Mutex<HashMap<Uuid, Credential>>,
    refresh_tokens: Mutex<HashMap<String, RefreshTokenRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    async fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>, ApiError> {
        let credentials = self.credentials.lock().unwrap();
        Ok(credentials
            .values()
            .find(|credential| credential.email == email)
            .cloned())
    }

    async fn find_credential_by_id(&self, id: Uuid) -> Result<Option<Credential>, ApiError> {
        let credentials = self.credentials.lock().unwrap();
        Ok(credentials.get(&id).cloned())
    }

    async fn create_credential(
        &self,
        email: &str,
        hashed_password: &str,
    ) -> Result<Credential, ApiError> {
        let mut credentials = self.credentials.lock().unwrap();

        if credentials.values().any(|credential| credential.email == email) {
            return Err(ApiError::Conflict("Email already exists".to_string()));
        }

        let now = Utc::now();
        let credential = Credential {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: hashed_password.to_string(),
            is_chirpy_red: false,
            created_at: now,
            updated_at: now,
        };
        credentials.insert(credential.id, credential.clone());

        Ok(credential)
    }

    async fn update_credential(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<Credential, ApiError> {
        let mut credentials = self.credentials.lock().unwrap();

        let credential = credentials
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        credential.email = email.to_string();
        credential.hashed_password = hashed_password.to_string();
        credential.updated_at = Utc::now();

        Ok(credential.clone())
    }

    async fn upgrade_credential(&self, id: Uuid) -> Result<(), ApiError> {
        let mut credentials = self.credentials.lock().unwrap();

        let credential = credentials
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        credential.is_chirpy_red = true;
        credential.updated_at = Utc::now();

        Ok(())
    }

    async fn delete_all_credentials(&self) -> Result<(), ApiError> {
        self.credentials.lock().unwrap().clear();
        Ok(())
    }
}

impl RefreshTokenStore for MemoryStore {
    async fn store_refresh_token(
        &self,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        let mut tokens = self.refresh_tokens.lock().unwrap();
        tokens.insert(
            token.to_string(),
            RefreshTokenRecord {
                user_id,
                expires_at,
                revoked_at: None,
            },
        );
        Ok(())
    }

    async fn fetch_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, ApiError> {
        let tokens = self.refresh_tokens.lock().unwrap();
        Ok(tokens.get(token).cloned())
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<(), ApiError> {
        let mut tokens = self.refresh_tokens.lock().unwrap();

        match tokens.get_mut(token) {
            Some(record) if record.revoked_at.is_none() => {
                record.revoked_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(ApiError::NotFound("refresh token not found".to_string())),
        }
    }
}

/// Configuration for tests; never touches the environment
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: String::new(),
        jwt_secret: "integration-test-secret".to_string(),
        polka_key: "integration-test-polka-key".to_string(),
        platform: "dev".to_string(),
        access_token_ttl: Duration::hours(1),
        refresh_token_ttl: Duration::days(60),
        port: 8080,
    }
}

/// Build a header map carrying `Authorization: Bearer <token>`
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());
    headers
}
