/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * API routes, the admin routes, and the hit-counted static fileserver into
 * a single Axum router.
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::admin::handlers::{metrics, reset};
use crate::middleware::metrics::track_fileserver_hits;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Groups
///
/// 1. **API routes** - accounts, sessions, chirps, webhooks (see
///    `api_routes`)
/// 2. **Admin routes** - `GET /admin/metrics`, `POST /admin/reset`
/// 3. **Fileserver** - `/app` serves static files, wrapped in the
///    hit-counting middleware that feeds the metrics endpoint
/// 4. **Fallback** - 404 for everything else
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // API routes
    let router = configure_api_routes(router);

    // Admin routes
    let router = router
        .route("/admin/metrics", axum::routing::get(metrics))
        .route("/admin/reset", axum::routing::post(reset));

    // Static fileserver with hit counting
    let fileserver: Router<AppState> = Router::new()
        .nest_service("/app", ServeDir::new("."))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            track_fileserver_hits,
        ));
    let router = router.merge(fileserver);

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
