/**
 * Server Configuration
 *
 * Configuration comes from environment variables (optionally loaded
 * from a `.env` file by the entry point):
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET`   - token signing secret (falls back to a development
 *   value, see `auth::sessions`)
 * - `SERVER_PORT`  - listen port, default 3000
 * - `RUST_LOG`     - tracing filter, default `info`
 *
 * Unlike services that can degrade without persistence, every operation
 * here is a store round trip, so a missing or unreachable database
 * fails startup instead of limping along.
 */

use sqlx::PgPool;

/// Load and initialize the database connection pool
///
/// Reads `DATABASE_URL`, connects, and runs migrations. Any failure is
/// returned to the caller and aborts startup.
pub async fn load_database() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL").map_err(|e| {
        tracing::error!("DATABASE_URL not set");
        Box::new(e) as Box<dyn std::error::Error>
    })?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Listen port from `SERVER_PORT`, default 3000
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}
