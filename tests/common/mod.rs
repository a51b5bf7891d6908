//! Shared helpers for the HTTP API test suites
//!
//! Two server flavours:
//!
//! - `lazy_server()` builds the real router over a pool that never
//!   connects. Good for everything that fails or succeeds before the
//!   first query (middleware, input validation, static fallback).
//! - `db_server()` connects to `DATABASE_URL` and runs migrations.
//!   Tests using it are `#[ignore]`d so the default suite passes
//!   without a database.

#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use uuid::Uuid;

use sharecircle::backend::auth::accounts::Account;
use sharecircle::backend::auth::sessions;
use sharecircle::backend::routes::create_router;
use sharecircle::backend::server::AppState;

/// Test server over a pool that never opens a connection
pub fn lazy_server() -> TestServer {
    let pool = PgPool::connect_lazy("postgres://localhost/sharecircle_test").unwrap();
    TestServer::new(create_router(AppState { pool })).unwrap()
}

/// Test server over the database named by DATABASE_URL
pub async fn db_server() -> (TestServer, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for database tests");
    let pool = PgPool::connect(&url).await.expect("failed to connect");
    sqlx::migrate!().run(&pool).await.expect("migrations failed");

    let server = TestServer::new(create_router(AppState { pool: pool.clone() })).unwrap();
    (server, pool)
}

/// Unique email so suites can share a database without colliding
pub fn unique_email(name: &str) -> String {
    format!("{}_{}@example.com", name, Uuid::new_v4().simple())
}

/// Sign a token for an account that does not need to exist
///
/// The middleware verifies tokens without touching the store, so this
/// is enough to pass the auth gate in no-database tests.
pub fn token_for(account_id: Uuid, email: &str) -> String {
    let account = Account {
        id: account_id,
        email: email.to_string(),
        password_hash: "unused".to_string(),
    };
    sessions::sign(&account).expect("failed to sign test token")
}

/// Signed-up user handle for the database suites
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub token: String,
}

/// Sign up a fresh user through the real endpoint
pub async fn signup(server: &TestServer, first_name: &str, last_name: &str) -> TestUser {
    let email = unique_email(&first_name.to_lowercase());
    let response = server
        .post("/api/auth/signup")
        .json(&serde_json::json!({
            "email": email,
            "password": "winteriscoming",
            "firstName": first_name,
            "lastName": last_name,
        }))
        .await;
    assert_eq!(response.status_code(), 200, "signup failed: {}", response.text());

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token missing").to_string();
    let id = sessions::account_id_from_token(&token).expect("token did not decode");

    TestUser { id, email, token }
}
