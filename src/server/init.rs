/**
 * Server Initialization
 *
 * This module assembles the application: database pool, session guard,
 * shared state, and router.
 *
 * # Initialization Process
 *
 * 1. Connect to Postgres and run migrations (required; failure aborts)
 * 2. Build the session guard from the immutable configuration
 * 3. Assemble `AppState` and the router
 */

use axum::Router;
use std::sync::atomic::AtomicI64;
use std::sync::Arc;

use crate::auth::guard::SessionGuard;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Propagates database connection and migration failures; the server does
/// not start without its store.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Chirpy backend server");

    let db_pool = connect_database(&config).await?;

    let guard = SessionGuard::new(&config);

    let app_state = AppState {
        config: Arc::new(config),
        guard,
        db_pool,
        fileserver_hits: Arc::new(AtomicI64::new(0)),
    };

    tracing::info!("Router configured");

    Ok(create_router(app_state))
}
