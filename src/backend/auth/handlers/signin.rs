/**
 * Signin Handler
 *
 * This module implements the authentication handler for POST /api/auth/signin.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Sign a session token and return it with the user's first name
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message, so the
 *   response does not reveal which accounts exist
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::backend::auth::accounts;
use crate::backend::auth::handlers::types::{AuthResponse, SigninRequest};
use crate::backend::auth::sessions;
use crate::backend::error::ApiError;
use crate::backend::profile::db as profile_db;

/// Signin handler
///
/// # Errors
///
/// * `401 Unauthorized` - no account matches the email or the password
///   comparison fails
/// * `500 Internal Server Error` - store or token failure
pub async fn signin(
    State(pool): State<PgPool>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let account = accounts::find_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Signin failed, unknown email: {}", request.email);
            ApiError::unauthorized("Invalid email or password.")
        })?;

    if !verify(&request.password, &account.password_hash)? {
        tracing::warn!("Signin failed, wrong password for: {}", request.email);
        return Err(ApiError::unauthorized("Invalid email or password."));
    }

    let user = profile_db::find_user(&pool, account.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let token = sessions::sign(&account)?;

    tracing::info!("Signed in: {} ({})", user.first_name, account.email);

    Ok(Json(AuthResponse {
        token,
        name: user.first_name,
    }))
}
