//! Webhooks Module
//!
//! Inbound service-to-service callbacks. Currently a single endpoint: the
//! Polka payment-upgrade webhook, authenticated by API key rather than a
//! user session.

/// HTTP handlers for webhook endpoints
pub mod handlers;

pub use handlers::polka_webhook;
