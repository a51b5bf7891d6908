/**
 * Verify Handler
 *
 * This module implements GET /api/auth/verify. The route sits behind the
 * auth middleware, so reaching the handler already proves the token was
 * accepted; the handler only confirms it.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::VerifyResponse;

/// Verify handler
///
/// Returns `{ "verified": true }`. A missing or invalid token never
/// reaches this handler; the middleware rejects it with 401 first.
pub async fn verify() -> Json<VerifyResponse> {
    Json(VerifyResponse { verified: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_confirms() {
        let Json(response) = verify().await;
        assert!(response.verified);
    }
}
