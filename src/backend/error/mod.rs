//! Backend Error Module
//!
//! This module defines the error taxonomy shared by all HTTP handlers and
//! the conversion of those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `InvalidInput` (400) - missing required fields
//! - `Unauthenticated` (401) - bad/missing/expired token
//! - `Unauthorized` (401) - bad credentials
//! - `Forbidden` (403) - acting outside a permitted relationship
//! - `Conflict` (400) - duplicate email
//! - `InvalidState` (400) - operation precondition unmet
//! - `NotFound` (404) - referenced entity absent
//! - `Database`/`Hash`/`Token` (500) - internal failures, generic message
//!
//! Handlers return `Result<Json<T>, ApiError>` and fail fast with a tagged
//! error as soon as a precondition check fails; the `IntoResponse` impl in
//! `conversion` renders the JSON `{ "error": message }` body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
