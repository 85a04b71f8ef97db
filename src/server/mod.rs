//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! - **`config`** - environment-loaded immutable configuration
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - app assembly (database, guard, router)

/// Configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
