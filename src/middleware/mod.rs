//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single layer: the
//! fileserver hit counter feeding the admin metrics endpoint.

pub mod metrics;

pub use metrics::track_fileserver_hits;
