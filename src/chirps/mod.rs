//! Chirps Module
//!
//! Short text posts. This module is thin persistence glue around the auth
//! core: handlers authenticate through the session guard, then read and
//! write chirp rows.
//!
//! - **`filter`** - profanity cleaning
//! - **`db`** - chirp persistence
//! - **`handlers`** - HTTP handlers for chirp CRUD

/// Profanity cleaning
pub mod filter;

/// Chirp persistence
pub mod db;

/// HTTP handlers for chirp endpoints
pub mod handlers;

pub use db::Chirp;
pub use handlers::{create_chirp, delete_chirp, get_chirp, get_chirps, ChirpResponse};
