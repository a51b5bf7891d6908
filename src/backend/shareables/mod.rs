//! Shareables Module
//!
//! Shareable items (things a user is giving or requesting) and the
//! feed built from a user's friends' items.
//!
//! # Module Structure
//!
//! ```text
//! shareables/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Shareable model, patch type, feed projection
//! ├── db.rs       - Ownership-scoped queries and the feed join
//! └── handlers.rs - HTTP handlers for /api/me/shareables and /api/me/feed
//! ```
//!
//! # Ownership
//!
//! The owner is set from the authenticated account at creation and can
//! never be supplied by the client. Updates and deletes match on
//! `id AND owner`, so acting on someone else's item fails the same way
//! as acting on a missing one.

/// Shareable model and projections
pub mod types;

/// Database operations for shareables
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use types::{FeedItem, NewShareable, Shareable, ShareableKind, ShareablePatch};
