//! Sharecircle - Main Library
//!
//! Sharecircle is a social resource-sharing backend. Users sign up,
//! manage a profile, befriend each other through a request/confirm
//! handshake, and post shareable items (things they are giving away or
//! requesting) that show up in their friends' feeds.
//!
//! # Overview
//!
//! The whole service is CRUD route handlers over PostgreSQL, guarded by
//! token-based authentication middleware. The only real branching lives
//! in the friend-request handshake (pending -> confirmed -> mutual
//! friendship) and the ownership checks on shareables; both are
//! implemented as explicit predicates evaluated before any mutation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sharecircle::backend::server::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app().await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! See the `backend` module documentation for the architecture.

/// Backend server-side code
pub mod backend;
