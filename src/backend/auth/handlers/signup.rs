/**
 * Signup Handler
 *
 * This module implements the registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate that email and password are present
 * 2. Check that the email is not already registered
 * 3. Hash the password with bcrypt
 * 4. Create the account and its profile in one transaction
 * 5. Sign a session token and return it with the user's first name
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (DEFAULT_COST) and never returned
 * - The unique index on accounts.email closes the check-then-create
 *   window; a concurrent duplicate surfaces as the same conflict error
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::accounts;
use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions;
use crate::backend::error::ApiError;

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - email or password missing, or email already in use
/// * `500 Internal Server Error` - hashing, store, or token failure
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::invalid_input(
            "Name, email, and password must be provided",
        ));
    }

    if accounts::email_taken(&pool, &request.email).await? {
        tracing::warn!("Signup rejected, email already in use: {}", request.email);
        return Err(ApiError::conflict("Email already in use."));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let (account, user) = accounts::create_with_profile(
        &pool,
        &request.email,
        &password_hash,
        &request.first_name,
        &request.last_name,
    )
    .await
    .map_err(|e| match &e {
        // A concurrent signup can slip past the email_taken check; the
        // unique index reports it here.
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ApiError::conflict("Email already in use.")
        }
        _ => ApiError::from(e),
    })?;

    let token = sessions::sign(&account)?;

    tracing::info!("Account created: {} ({})", user.first_name, account.email);

    Ok(Json(AuthResponse {
        token,
        name: user.first_name,
    }))
}
