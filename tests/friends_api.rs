//! Friendship lifecycle integration tests
//!
//! Exercises the request -> pending -> confirm -> mutual friendship
//! handshake and its guards through the real HTTP API. All tests here
//! need a database, so they are `#[ignore]`d; run with `DATABASE_URL`
//! pointing at a disposable database.

mod common;

use axum::http::StatusCode;
use serial_test::serial;

use common::{db_server, signup, unique_email};

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn friend_request_lands_in_recipients_pending_list() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    let response = server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": dany.email }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["requestReceived"], true);

    let dany_profile: serde_json::Value = server
        .get("/api/me")
        .add_header("Authorization", dany.token.clone())
        .await
        .json();
    assert_eq!(
        dany_profile["pendingFriends"],
        serde_json::json!([jon.id.to_string()])
    );
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn resending_a_request_is_idempotent() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    for _ in 0..2 {
        let response = server
            .put("/api/me/friend-requests")
            .add_header("Authorization", jon.token.clone())
            .json(&serde_json::json!({ "email": dany.email }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let dany_profile: serde_json::Value = server
        .get("/api/me")
        .add_header("Authorization", dany.token.clone())
        .await
        .json();
    assert_eq!(dany_profile["pendingFriends"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn cannot_friend_yourself() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;

    let response = server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": jon.email }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("yourself"));
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn unknown_recipient_email_is_not_found() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;

    let response = server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": unique_email("ghost") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn confirm_requires_a_pending_request() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    // Nothing pending yet: confirming is premature
    let response = server
        .put(&format!("/api/me/friends/{}", jon.id))
        .add_header("Authorization", dany.token.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No pending friend request found.");
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn confirm_makes_the_friendship_mutual() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": dany.email }))
        .await;

    let response = server
        .put(&format!("/api/me/friends/{}", jon.id))
        .add_header("Authorization", dany.token.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let dany_after: serde_json::Value = response.json();
    assert_eq!(
        dany_after["friends"],
        serde_json::json!([jon.id.to_string()])
    );
    assert_eq!(dany_after["pendingFriends"], serde_json::json!([]));

    let jon_after: serde_json::Value = server
        .get("/api/me")
        .add_header("Authorization", jon.token.clone())
        .await
        .json();
    assert_eq!(
        jon_after["friends"],
        serde_json::json!([dany.id.to_string()])
    );
    assert_eq!(jon_after["pendingFriends"], serde_json::json!([]));
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn cannot_request_an_existing_friend() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": dany.email }))
        .await;
    server
        .put(&format!("/api/me/friends/{}", jon.id))
        .add_header("Authorization", dany.token.clone())
        .await;

    let response = server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": dany.email }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("already"));
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn friend_list_projects_summaries() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;
    let sansa = signup(&server, "Sansa", "Stark").await;

    // Dany is a friend; Sansa only pending
    server
        .put("/api/me/friend-requests")
        .add_header("Authorization", dany.token.clone())
        .json(&serde_json::json!({ "email": jon.email }))
        .await;
    server
        .put(&format!("/api/me/friends/{}", dany.id))
        .add_header("Authorization", jon.token.clone())
        .await;
    server
        .put("/api/me/friend-requests")
        .add_header("Authorization", sansa.token.clone())
        .json(&serde_json::json!({ "email": jon.email }))
        .await;

    let body: serde_json::Value = server
        .get("/api/me/friends")
        .add_header("Authorization", jon.token.clone())
        .await
        .json();

    let friends = body["friends"].as_array().unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0]["firstName"], "Dany");
    assert!(friends[0].get("friends").is_none());

    let pending = body["pendingFriends"].as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["firstName"], "Sansa");
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn friend_profile_is_gated_on_friendship() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let sansa = signup(&server, "Sansa", "Stark").await;

    let response = server
        .get(&format!("/api/me/friends/{}", sansa.id))
        .add_header("Authorization", jon.token.clone())
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Not your friend!");
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn unfriend_removes_both_sides() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    server
        .put("/api/me/friend-requests")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({ "email": dany.email }))
        .await;
    server
        .put(&format!("/api/me/friends/{}", jon.id))
        .add_header("Authorization", dany.token.clone())
        .await;

    let response = server
        .delete(&format!("/api/me/friends/{}", dany.id))
        .add_header("Authorization", jon.token.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["deleted"], true);

    let jon_after: serde_json::Value = server
        .get("/api/me")
        .add_header("Authorization", jon.token.clone())
        .await
        .json();
    assert_eq!(jon_after["friends"], serde_json::json!([]));

    let dany_after: serde_json::Value = server
        .get("/api/me")
        .add_header("Authorization", dany.token.clone())
        .await
        .json();
    assert_eq!(dany_after["friends"], serde_json::json!([]));

    // A second unfriend finds nothing to remove
    let again = server
        .delete(&format!("/api/me/friends/{}", dany.id))
        .add_header("Authorization", jon.token.clone())
        .await;
    assert_eq!(again.status_code(), StatusCode::BAD_REQUEST);
    let error: serde_json::Value = again.json();
    assert_eq!(error["error"], "No friendship found.");
}

#[tokio::test]
#[serial]
#[ignore] // Requires DATABASE_URL
async fn profile_patch_cannot_touch_relationship_arrays() {
    let (server, _pool) = db_server().await;

    let jon = signup(&server, "Jon", "Snow").await;
    let dany = signup(&server, "Dany", "Targaryan").await;

    let response = server
        .put("/api/me")
        .add_header("Authorization", jon.token.clone())
        .json(&serde_json::json!({
            "lastName": "Targaryen",
            "friends": [dany.id.to_string()],
            "pendingFriends": [dany.id.to_string()],
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["lastName"], "Targaryen");
    assert_eq!(body["friends"], serde_json::json!([]));
    assert_eq!(body["pendingFriends"], serde_json::json!([]));
}
