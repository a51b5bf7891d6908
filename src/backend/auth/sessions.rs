/**
 * Session Tokens
 *
 * This module handles token generation and validation for account sessions.
 * Tokens are signed JWTs carrying the account id; every authenticated route
 * verifies one through the auth middleware.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::backend::auth::accounts::Account;

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID
    pub id: String,
    /// Account email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the signing secret from the environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|err| {
        tracing::warn!("Missing JWT_SECRET ({}), using development secret", err);
        "sharecircle-dev-secret-change-in-production".to_string()
    })
}

/// Sign a session token for an account
///
/// The token decodes to `{ id, email }` and expires after 30 days.
pub fn sign(account: &Account) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    // Token expires in 30 days
    let exp = now + (30 * 24 * 60 * 60);

    let claims = Claims {
        id: account.id.to_string(),
        email: account.email.clone(),
        exp,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract the account id from a token
pub fn account_id_from_token(token: &str) -> Result<Uuid, String> {
    let claims =
        verify_token(token).map_err(|e| format!("Token verification failed: {}", e))?;
    Uuid::parse_str(&claims.id).map_err(|e| format!("Invalid account ID in token: {}", e))
}
