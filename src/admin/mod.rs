//! Admin Module
//!
//! Operational endpoints under `/admin`: the fileserver hit counter and the
//! dev-platform reset.

/// HTTP handlers for admin endpoints
pub mod handlers;

pub use handlers::{metrics, reset, MetricsResponse};
