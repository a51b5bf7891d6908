//! Route Configuration Module
//!
//! Assembles all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Pipeline assembly (tracing, auth layer, fallback)
//! └── api_routes.rs - Route registrations for the JSON API
//! ```
//!
//! # Pipeline Order
//!
//! Request tracing runs first, then route dispatch. The authenticated
//! route group carries the auth middleware; unmatched routes fall back
//! to the SPA entry point in `public/`.

/// Pipeline assembly
pub mod router;

/// Route registrations
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
