/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers.
 * Every service failure is tagged with one of these variants and
 * converted to an HTTP response by the `conversion` module.
 *
 * # Error Categories
 *
 * - Input errors: missing required fields in a request body
 * - Authentication errors: bad/missing tokens, bad credentials
 * - Authorization errors: acting outside a permitted relationship
 *   (self-friend, duplicate friend, not-a-friend, not-owner)
 * - State errors: operation preconditions unmet (no pending request,
 *   no friendship) or duplicate email on signup
 * - Internal errors: store, hashing, or token failures, surfaced as
 *   500 without leaking details
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error type
///
/// Each variant maps to a fixed HTTP status (see `status_code`) and a
/// human-readable message (see `message`). Store-level, hashing, and
/// token-signing failures convert in via `#[from]` and surface as 500
/// with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields missing from a request body
    #[error("{0}")]
    InvalidInput(String),

    /// Missing, malformed, or expired token
    #[error("Authentication required.")]
    Unauthenticated,

    /// Credentials did not match an account
    #[error("{0}")]
    Unauthorized(String),

    /// Acting outside a permitted relationship
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate email on signup
    #[error("{0}")]
    Conflict(String),

    /// Operation precondition unmet
    #[error("{0}")]
    InvalidState(String),

    /// Referenced entity absent
    #[error("{0}")]
    NotFound(String),

    /// Store-level failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// HTTP status for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput`, `Conflict`, `InvalidState` - 400 Bad Request
    /// - `Unauthenticated`, `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Database`, `Hash`, `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Conflict(_) | Self::InvalidState(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to clients
    ///
    /// Internal failures collapse to a generic message; the underlying
    /// error is logged, never returned.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether this variant hides an internal failure
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hash(_) | Self::Token(_))
    }
}
