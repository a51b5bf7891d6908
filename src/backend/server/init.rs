/**
 * Server Initialization
 *
 * This module wires together the pieces built elsewhere: database pool,
 * application state, and router.
 *
 * # Initialization Process
 *
 * 1. Connect to the database and run migrations
 * 2. Build the application state around the pool
 * 3. Assemble the router with the full request pipeline
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// Fails if the database cannot be reached or migrated; there is no
/// degraded mode without persistence.
pub async fn create_app() -> Result<Router<()>, Box<dyn std::error::Error>> {
    tracing::info!("Initializing sharecircle backend server");

    let pool = load_database().await?;
    let state = AppState { pool };

    Ok(create_router(state))
}
