//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Registration handler
//! ├── signin.rs   - Credential verification handler
//! └── verify.rs   - Token confirmation handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - create account + profile, issue token
//! - **`signin`** - POST /api/auth/signin - verify credentials, issue token
//! - **`verify`** - GET /api/auth/verify - confirm an accepted token

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Verify handler
pub mod verify;

// Re-export commonly used types
pub use types::{AuthResponse, SigninRequest, SignupRequest, VerifyResponse};

// Re-export handlers
pub use signin::signin;
pub use signup::signup;
pub use verify::verify;
