//! Authentication Module
//!
//! This module handles the full authentication and session lifecycle:
//! password hashing, access-token issuance and verification, refresh-token
//! issuance and revocation, and the authorization checks that gate every
//! mutating endpoint.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`passwords`** - bcrypt password hashing and verification
//! - **`sessions`** - JWT access-token issuance and verification
//! - **`refresh`**  - opaque refresh-token generation and persistence
//! - **`extract`**  - `Authorization` header parsing (Bearer / ApiKey)
//! - **`guard`**    - per-request authentication and authorization
//! - **`store`**    - credential and refresh-token store interfaces
//! - **`users`**    - Postgres credential store
//! - **`error`**    - fine-grained auth failure modes
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Session Lifecycle
//!
//! 1. **Signup**: email + password → bcrypt hash → user created
//! 2. **Login**: credentials verified → access token (1h) + refresh token
//!    (60d) returned
//! 3. **Refresh**: valid refresh token → new access token
//! 4. **Revoke**: refresh token marked revoked; it never refreshes again
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Access tokens are HS256 JWTs verified with zero expiry leeway
//! - Refresh tokens are 256-bit random values; revocation marks, never
//!   deletes
//! - Invalid credentials always classify as 401 with a generic body;
//!   ownership violations classify as 403

/// Fine-grained auth failure modes
pub mod error;

/// Password hashing and verification
pub mod passwords;

/// JWT access-token issuance and verification
pub mod sessions;

/// Refresh-token generation and persistence
pub mod refresh;

/// Authorization header parsing
pub mod extract;

/// Per-request authentication and authorization
pub mod guard;

/// Credential and refresh-token store interfaces
pub mod store;

/// Postgres credential store
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use error::AuthError;
pub use guard::{SessionGuard, SessionTokens};
pub use store::{Credential, CredentialStore, RefreshTokenRecord, RefreshTokenStore};
