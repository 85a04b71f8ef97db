/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations that let handlers extract just the slice of state they
 * need.
 *
 * # Thread Safety
 *
 * Everything in `AppState` is either immutable after startup (config, the
 * session guard) or internally synchronized (`PgPool`, the atomic hit
 * counter), so the state clones freely into every request task with no
 * locking of its own.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::atomic::AtomicI64;
use std::sync::Arc;

use crate::auth::guard::SessionGuard;
use crate::server::config::AppConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `config` - immutable startup configuration
/// * `guard` - authentication/authorization orchestrator (read-only)
/// * `db_pool` - Postgres connection pool
/// * `fileserver_hits` - request counter for the `/app` fileserver
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration built once at startup
    pub config: Arc<AppConfig>,

    /// Session guard holding the signing secret and API key
    pub guard: SessionGuard,

    /// Database connection pool
    pub db_pool: PgPool,

    /// Fileserver hit counter, reported by `/admin/metrics`
    pub fileserver_hits: Arc<AtomicI64>,
}

/// Allow handlers that only read chirps to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the session guard directly
impl FromRef<AppState> for SessionGuard {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.guard.clone()
    }
}
