//! Authentication Module
//!
//! This module handles account identity, signup/signin, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model and credential store operations
//! ├── sessions.rs     - Session token signing and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - Registration handler
//!     ├── signin.rs   - Credential verification handler
//!     └── verify.rs   - Token confirmation handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password + name -> account and profile created
//!    (same id, one transaction) -> token returned
//! 2. **Signin**: email + password -> bcrypt comparison -> token returned
//! 3. **Verify**: token -> middleware accepts it -> `{ verified: true }`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are signed JWTs decoding to the account id, expiring in 30 days
//! - Invalid credentials return 401 with a single message (no information
//!   leakage about which accounts exist)

/// Account model and credential store operations
pub mod accounts;

/// Session token signing and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::Account;
pub use handlers::{signin, signup, verify, AuthResponse, SigninRequest, SignupRequest};
