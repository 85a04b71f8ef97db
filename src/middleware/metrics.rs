/**
 * Metrics Middleware
 *
 * Counts requests passing through the static fileserver. The counter is a
 * process-wide atomic shared through `AppState`; `/admin/metrics` reads it
 * and `/admin/reset` zeroes it.
 */

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::atomic::Ordering;

use crate::server::state::AppState;

/// Fileserver hit-counting middleware
///
/// Increments the shared counter and passes the request through untouched.
pub async fn track_fileserver_hits(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.fileserver_hits.fetch_add(1, Ordering::Relaxed);

    next.run(request).await
}
