//! Profile and friendship HTTP handlers
//!
//! Everything under `/api/me` that touches profiles: own-profile reads
//! and updates, the friend-request lifecycle (request, confirm,
//! unfriend), friend lists, and friend profile retrieval gated by
//! friendship. Authorization predicates run before any mutation.

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::accounts;
use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentAccount;
use crate::backend::profile::db;
use crate::backend::profile::types::{
    DeletedResponse, FriendRequestBody, FriendsResponse, ProfileResponse,
    RequestReceivedResponse, User, UserPatch,
};
use crate::backend::shareables::db as shareables_db;

/// GET /api/me
///
/// Own profile with own shareables embedded.
pub async fn get_own_profile(
    State(pool): State<PgPool>,
    account: CurrentAccount,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = db::find_user(&pool, account.account_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let shareables = shareables_db::list_by_owner(&pool, account.account_id).await?;

    Ok(Json(ProfileResponse { user, shareables }))
}

/// PUT /api/me
///
/// Applies a typed patch to the caller's profile. Relationship arrays
/// are not part of the patch type, so they cannot be edited here.
pub async fn update_own_profile(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let updated = db::update_user(&pool, account.account_id, &patch)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    Ok(Json(updated))
}

/// DELETE /api/me
///
/// Removes the caller's profile, account, shareables, and any reference
/// to them in other users' relationship arrays.
pub async fn delete_own_profile(
    State(pool): State<PgPool>,
    account: CurrentAccount,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !db::delete_profile(&pool, account.account_id).await? {
        return Err(ApiError::not_found("User not found."));
    }

    tracing::info!("Profile deleted: {}", account.account_id);

    Ok(Json(DeletedResponse { deleted: true }))
}

/// PUT /api/me/friend-requests
///
/// Sends a friend request to the user owning the given email. The
/// request lands in the recipient's pending list; re-sending is
/// idempotent.
pub async fn send_friend_request(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Json(body): Json<FriendRequestBody>,
) -> Result<Json<RequestReceivedResponse>, ApiError> {
    let recipient = accounts::find_by_email(&pool, &body.email)
        .await?
        .ok_or_else(|| ApiError::not_found("No user with that email."))?;

    if recipient.id == account.account_id {
        return Err(ApiError::forbidden("Cannot add yourself as a friend."));
    }

    if db::is_friend(&pool, recipient.id, account.account_id).await? {
        return Err(ApiError::forbidden(
            "Cannot add someone who is already a friend.",
        ));
    }

    db::add_pending_request(&pool, recipient.id, account.account_id).await?;

    tracing::info!(
        "Friend request from {} to {}",
        account.account_id,
        recipient.id
    );

    Ok(Json(RequestReceivedResponse {
        request_received: true,
    }))
}

/// PUT /api/me/friends/{id}
///
/// Confirms a pending friend request from the user with the given id.
/// Both profiles end up holding the other in `friends`.
pub async fn confirm_friend_request(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Path(requester): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    if !db::has_pending_request(&pool, account.account_id, requester).await? {
        return Err(ApiError::invalid_state("No pending friend request found."));
    }

    let updated = db::confirm_friend(&pool, account.account_id, requester)
        .await?
        .ok_or_else(|| ApiError::invalid_state("No pending friend request found."))?;

    tracing::info!("Friendship confirmed: {} <-> {}", account.account_id, requester);

    Ok(Json(updated))
}

/// GET /api/me/friends
///
/// Friend and pending-friend lists projected to summaries.
pub async fn list_friends(
    State(pool): State<PgPool>,
    account: CurrentAccount,
) -> Result<Json<FriendsResponse>, ApiError> {
    let user = db::find_user(&pool, account.account_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let friends = db::friend_summaries(&pool, &user.friends).await?;
    let pending_friends = db::friend_summaries(&pool, &user.pending_friends).await?;

    Ok(Json(FriendsResponse {
        friends,
        pending_friends,
    }))
}

/// GET /api/me/friends/{id}
///
/// A single friend's full profile with their shareables embedded.
/// Gated on the friendship actually existing.
pub async fn get_friend_profile(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Path(friend_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    if !db::is_friend(&pool, account.account_id, friend_id).await? {
        return Err(ApiError::forbidden("Not your friend!"));
    }

    let user = db::find_user(&pool, friend_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let shareables = shareables_db::list_by_owner(&pool, friend_id).await?;

    Ok(Json(ProfileResponse { user, shareables }))
}

/// DELETE /api/me/friends/{id}
///
/// Removes the friendship from both sides.
pub async fn unfriend(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Path(friend_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !db::unfriend(&pool, account.account_id, friend_id).await? {
        return Err(ApiError::invalid_state("No friendship found."));
    }

    tracing::info!("Unfriended: {} <-> {}", account.account_id, friend_id);

    Ok(Json(DeletedResponse { deleted: true }))
}
