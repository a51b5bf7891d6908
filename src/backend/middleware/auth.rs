/**
 * Authentication Middleware
 *
 * This middleware guards every route that requires an authenticated
 * account. It extracts the token from the `Authorization` header,
 * verifies it, and attaches the resolved account identity to the
 * request extensions for handlers to pick up. It performs no store
 * access and has no side effects.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;

/// Account identity resolved from a verified token
///
/// Inserted into request extensions by `require_auth` and extracted by
/// handlers as a function parameter.
#[derive(Clone, Debug)]
pub struct CurrentAccount {
    pub account_id: Uuid,
}

/// Authentication middleware
///
/// 1. Reads the `Authorization` header (a bare token or `Bearer <token>`)
/// 2. Verifies signature and expiry
/// 3. Attaches `CurrentAccount` to request extensions and continues
///
/// Rejects with 401 if the header is missing or the token is invalid.
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated
        })?;

    // Clients may send the token bare or with a Bearer prefix
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::Unauthenticated
    })?;

    let account_id = Uuid::parse_str(&claims.id).map_err(|e| {
        tracing::warn!("Invalid account ID in token: {:?}", e);
        ApiError::Unauthenticated
    })?;

    request.extensions_mut().insert(CurrentAccount { account_id });

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentAccount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAccount>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentAccount not found in request extensions");
                ApiError::Unauthenticated
            })
    }
}
