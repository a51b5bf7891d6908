/**
 * Application State
 *
 * This module defines the application state and the `FromRef`
 * implementations that let handlers extract just the part they need.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted; cloning the state per
 * request is cheap and every handler talks to the same pool. There is
 * no in-process shared mutable state: all persistence goes through the
 * database, coordinated only by per-row atomic updates and the
 * transactions in the db modules.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
}

/// Allow handlers to extract `State<PgPool>` directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
