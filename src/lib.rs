//! Chirpy - Social Posting Backend
//!
//! Chirpy is a small social-posting backend: user accounts, JWT
//! authentication with refresh-token rotation, short text posts ("chirps")
//! with basic profanity filtering, an admin metrics endpoint, and a
//! payment-upgrade webhook.
//!
//! # Module Structure
//!
//! - **`auth`** - the authentication and session-lifecycle core: password
//!   hashing, access tokens, refresh tokens, header parsing, and the
//!   session guard that gates every mutating endpoint
//! - **`chirps`** - chirp CRUD and profanity filtering
//! - **`webhooks`** - the Polka payment-upgrade webhook
//! - **`admin`** - metrics and the dev-platform reset
//! - **`middleware`** - fileserver hit counting
//! - **`routes`** - router assembly
//! - **`server`** - configuration, shared state, initialization
//! - **`error`** - transport-facing error classification
//!
//! # Authentication Flow
//!
//! 1. **Signup**: `POST /api/users` with email and password
//! 2. **Login**: `POST /api/login` returns an access token (1h) and a
//!    refresh token (60d)
//! 3. **Refresh**: `POST /api/refresh` exchanges a live refresh token for a
//!    new access token
//! 4. **Revoke**: `POST /api/revoke` retires a refresh token for good
//!
//! # Error Classification
//!
//! Handlers return [`error::ApiError`]; a missing or invalid credential is
//! always `Unauthorized` (401) while a valid identity acting on a resource
//! it does not own is `Forbidden` (403). See the `error` module.
//!
//! # Example
//!
//! ```rust,no_run
//! use chirpy::server::config::AppConfig;
//! use chirpy::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Authentication and session lifecycle
pub mod auth;

/// Chirp CRUD and profanity filtering
pub mod chirps;

/// Inbound service webhooks
pub mod webhooks;

/// Admin endpoints
pub mod admin;

/// HTTP middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

/// Error classification
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
