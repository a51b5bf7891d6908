/**
 * Router Configuration
 *
 * This module assembles the request pipeline in explicit order:
 *
 * 1. Request tracing (`TraceLayer`)
 * 2. Public auth routes (signup, signin)
 * 3. Authenticated routes, wrapped in the auth middleware
 * 4. Static files from `public/`, with the SPA entry point served for
 *    any unmatched route
 */

use axum::{middleware, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::backend::middleware::require_auth;
use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// The auth middleware wraps only the authenticated group; signup and
/// signin stay outside it. Every route not matched by the API serves
/// the SPA entry point.
pub fn create_router(state: AppState) -> Router<()> {
    let protected = protected_routes().route_layer(middleware::from_fn(require_auth));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        .fallback_service(
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
