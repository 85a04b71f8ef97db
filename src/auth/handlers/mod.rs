//! Authentication Handlers Module
//!
//! HTTP handlers for the account and session endpoints.
//!
//! # Handlers
//!
//! - **`create_user`** - POST /api/users - user registration
//! - **`login`** - POST /api/login - credential verification and token issue
//! - **`update_user`** - PUT /api/users - email/password replacement
//! - **`refresh_access_token`** - POST /api/refresh - new access token
//! - **`revoke_refresh_token`** - POST /api/revoke - refresh-token revocation

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Refresh and revoke handlers
pub mod refresh;

/// Update-user handler
pub mod update;

// Re-export commonly used types
pub use types::{CreateUserRequest, LoginRequest, LoginResponse, RefreshResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use refresh::{refresh_access_token, revoke_refresh_token};
pub use signup::create_user;
pub use update::update_user;
