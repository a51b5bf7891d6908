/**
 * API Route Handlers
 *
 * This module groups the route registrations for the JSON API.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - registration
 * - `POST /api/auth/signin` - credential verification
 *
 * ## Authenticated (token required)
 * - `GET  /api/auth/verify` - token confirmation
 * - `GET/PUT/DELETE /api/me` - own profile
 * - `PUT  /api/me/friend-requests` - send a friend request by email
 * - `GET  /api/me/friends` - friend and pending lists
 * - `PUT/GET/DELETE /api/me/friends/{id}` - confirm, view, unfriend
 * - `POST/GET /api/me/shareables` - create, list own
 * - `PUT/DELETE /api/me/shareables/{id}` - update, delete own
 * - `GET  /api/me/feed` - friends' shareables
 */

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{signin, signup, verify};
use crate::backend::profile::handlers::{
    confirm_friend_request, delete_own_profile, get_friend_profile, get_own_profile,
    list_friends, send_friend_request, unfriend, update_own_profile,
};
use crate::backend::server::state::AppState;
use crate::backend::shareables::handlers::{
    create_shareable, delete_shareable, feed, list_own_shareables, update_shareable,
};

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/signin", post(signin))
}

/// Routes behind the auth middleware
///
/// The middleware layer itself is applied by the router assembly so the
/// whole group shares one ordered pipeline.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/verify", get(verify))
        .route(
            "/api/me",
            get(get_own_profile)
                .put(update_own_profile)
                .delete(delete_own_profile),
        )
        .route("/api/me/friend-requests", put(send_friend_request))
        .route("/api/me/friends", get(list_friends))
        .route(
            "/api/me/friends/{id}",
            put(confirm_friend_request)
                .get(get_friend_profile)
                .delete(unfriend),
        )
        .route(
            "/api/me/shareables",
            post(create_shareable).get(list_own_shareables),
        )
        .route(
            "/api/me/shareables/{id}",
            put(update_shareable).delete(delete_shareable),
        )
        .route("/api/me/feed", get(feed))
}
