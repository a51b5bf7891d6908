//! Profile and Friendship Module
//!
//! Profiles, the friend-request lifecycle, and friendship-gated reads.
//!
//! # Module Structure
//!
//! ```text
//! profile/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - User model, patch type, projections
//! ├── db.rs       - Row mapping, array set operations, transactions
//! └── handlers.rs - HTTP handlers for /api/me and /api/me/friends
//! ```
//!
//! # Friendship Lifecycle
//!
//! 1. **Request**: A asks for B by email; A's id lands in B's
//!    `pending_friends` (set-add, idempotent)
//! 2. **Confirm**: B confirms A; A moves from B's pending list into
//!    B's friends, and B is added to A's friends, in one transaction
//! 3. **Unfriend**: either side removes the relation from both
//!    profiles, in one transaction
//!
//! `friends` stays symmetric because it is only ever written through
//! those paired operations; profile patches cannot reach it.

/// User model, patch type, and response projections
pub mod types;

/// Database operations for profiles and friendships
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use types::{FriendsResponse, ProfileResponse, User, UserPatch};
