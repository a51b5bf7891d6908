//! Backend Module
//!
//! The complete server-side of the sharecircle application: an Axum
//! HTTP server exposing a JSON API for accounts, profiles, friendships,
//! and shareable items, persisted in PostgreSQL.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and pipeline assembly
//! - **`middleware`** - token verification for authenticated routes
//! - **`auth`** - accounts, session tokens, signup/signin handlers
//! - **`profile`** - profiles and the friendship lifecycle
//! - **`shareables`** - shareable items and the friends feed
//! - **`error`** - error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Server binary entry point
//! ├── server/      - Initialization and state
//! ├── routes/      - Route configuration
//! ├── middleware/  - Request middleware
//! ├── auth/        - Authentication
//! ├── profile/     - Profiles and friendships
//! ├── shareables/  - Shareable items and feed
//! └── error/       - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request -> tracing layer -> auth middleware (everything except
//! signup/signin) -> route handler -> database -> JSON response, with
//! failures funnelled through `error::ApiError`'s `IntoResponse`.
//!
//! # Concurrency
//!
//! Handlers share nothing in-process beyond the connection pool.
//! Single-row updates (including the array set operations on
//! relationship columns) are atomic on their own; mutations spanning
//! rows run in transactions in the db modules.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Authentication and account management
pub mod auth;

/// Profiles and friendships
pub mod profile;

/// Shareable items and feed
pub mod shareables;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
