/**
 * API Route Handlers
 *
 * This module wires the `/api` endpoints onto the router.
 *
 * # Routes
 *
 * ## Health
 * - `GET /api/healthz` - readiness probe
 *
 * ## Accounts & Sessions
 * - `POST /api/users` - user registration
 * - `PUT /api/users` - update email/password (access token)
 * - `POST /api/login` - credential verification, token issue
 * - `POST /api/refresh` - new access token (refresh token)
 * - `POST /api/revoke` - refresh-token revocation
 *
 * ## Chirps
 * - `POST /api/chirps` - create (access token)
 * - `GET /api/chirps` - list (public)
 * - `GET /api/chirps/{chirp_id}` - fetch one (public)
 * - `DELETE /api/chirps/{chirp_id}` - delete (access token + ownership)
 *
 * ## Webhooks
 * - `POST /api/polka/webhooks` - payment upgrade (API key)
 */

use axum::Router;

use crate::auth::handlers::{
    create_user, login, refresh_access_token, revoke_refresh_token, update_user,
};
use crate::chirps::handlers::{create_chirp, delete_chirp, get_chirp, get_chirps};
use crate::server::state::AppState;
use crate::webhooks::handlers::polka_webhook;

/// Configure API routes
///
/// Authentication is enforced inside each handler through the session
/// guard, not by a blanket middleware layer - the three credential kinds
/// (access token, refresh token, API key) differ per route.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/healthz", axum::routing::get(healthz))
        // Account endpoints
        .route(
            "/api/users",
            axum::routing::post(create_user).put(update_user),
        )
        // Session endpoints
        .route("/api/login", axum::routing::post(login))
        .route("/api/refresh", axum::routing::post(refresh_access_token))
        .route("/api/revoke", axum::routing::post(revoke_refresh_token))
        // Chirp endpoints
        .route(
            "/api/chirps",
            axum::routing::post(create_chirp).get(get_chirps),
        )
        .route(
            "/api/chirps/{chirp_id}",
            axum::routing::get(get_chirp).delete(delete_chirp),
        )
        // Webhook endpoints
        .route("/api/polka/webhooks", axum::routing::post(polka_webhook))
}

/// Readiness probe
async fn healthz() -> &'static str {
    "OK"
}
