/**
 * Account Model and Credential Store Operations
 *
 * This module holds the identity record (email + password hash) and its
 * database operations. Accounts are created on signup together with a
 * profile sharing the same id, and looked up by email on signin.
 *
 * Accounts are never serialized into responses.
 */

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::profile::types::User;

/// Account identity record
///
/// 1:1 with a `User` profile (same id). The password hash is a bcrypt
/// digest; the plaintext password is dropped as soon as it is hashed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Check whether an email is already registered
pub async fn email_taken(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

/// Get an account by email
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        "SELECT id, email, password_hash FROM accounts WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Create an account and its profile in one transaction
///
/// Both rows share the same id. The unique index on `accounts.email` is
/// the authority on duplicates; callers map a unique violation to a
/// conflict error. Rolls back if either insert fails, so an account can
/// never exist without a profile.
pub async fn create_with_profile(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    first_name: &str,
    last_name: &str,
) -> Result<(Account, User), sqlx::Error> {
    let id = Uuid::new_v4();
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO accounts (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO users (id, first_name, last_name) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let account = Account {
        id,
        email: email.to_string(),
        password_hash: password_hash.to_string(),
    };
    let user = User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        picture_url: None,
        contact: None,
        availability: None,
        friends: Vec::new(),
        pending_friends: Vec::new(),
    };

    Ok((account, user))
}
