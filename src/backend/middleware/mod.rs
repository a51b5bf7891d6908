//! Middleware Module
//!
//! HTTP middleware for the backend server. The request pipeline is
//! assembled explicitly in `routes::router`: request tracing first,
//! then route dispatch, with `require_auth` layered onto every route
//! under `/api/me` and `/api/auth/verify`.
//!
//! - **`auth`** - token verification and account identity extraction

pub mod auth;

pub use auth::{require_auth, CurrentAccount};
