//! Route Configuration Module
//!
//! Assembles all HTTP routes for the backend server.
//!
//! - **`router`** - main router creation (API + admin + fileserver)
//! - **`api_routes`** - `/api` endpoint wiring

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
