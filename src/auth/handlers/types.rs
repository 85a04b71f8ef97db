/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login, update-user, and
 * refresh handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::store::Credential;

/// Create-user request
#[derive(Deserialize, Debug)]
pub struct CreateUserRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, never persisted raw)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Update-user request (full replacement of email and password)
#[derive(Deserialize, Debug)]
pub struct UpdateUserRequest {
    pub email: String,
    pub password: String,
}

/// User response (without sensitive data)
///
/// The password hash is deliberately absent; `Credential` itself cannot be
/// serialized.
#[derive(Serialize, Debug)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// Created at timestamp (RFC 3339)
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp (RFC 3339)
    pub updated_at: DateTime<Utc>,
    /// User's email address
    pub email: String,
    /// Whether the user has Chirpy Red
    pub is_chirpy_red: bool,
}

impl From<Credential> for UserResponse {
    fn from(credential: Credential) -> Self {
        Self {
            id: credential.id,
            created_at: credential.created_at,
            updated_at: credential.updated_at,
            email: credential.email,
            is_chirpy_red: credential.is_chirpy_red,
        }
    }
}

/// Login response: the user plus a fresh session token pair
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
    /// JWT access token (1 hour by default)
    pub token: String,
    /// Opaque refresh token (60 days by default)
    pub refresh_token: String,
}

/// Refresh response: a newly minted access token
#[derive(Serialize, Debug)]
pub struct RefreshResponse {
    pub token: String,
}
