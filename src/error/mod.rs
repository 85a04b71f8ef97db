//! API Error Module
//!
//! This module defines the transport-facing error classification for the
//! backend. Handlers return these errors and the conversion layer maps them
//! to HTTP responses.
//!
//! # Module Structure
//!
//! ```
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Classification
//!
//! The central invariant of this module is that authentication failures and
//! authorization failures are classified separately:
//!
//! - `Unauthorized` - the credential is missing, malformed, expired, or
//!   otherwise invalid. The response never says which.
//! - `Forbidden` - the credential is valid but the caller may not act on the
//!   targeted resource.
//!
//! All errors convert to a JSON body of the form `{"error": "..."}` via the
//! `IntoResponse` implementation in `conversion`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
