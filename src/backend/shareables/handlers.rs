//! Shareable HTTP handlers
//!
//! Ownership-scoped CRUD on shareable items under /api/me/shareables,
//! plus the feed aggregation across the caller's friends.

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::CurrentAccount;
use crate::backend::profile::db as profile_db;
use crate::backend::profile::types::DeletedResponse;
use crate::backend::shareables::db;
use crate::backend::shareables::types::{FeedItem, NewShareable, Shareable, ShareablePatch};

const NOT_OWNER: &str = "You do not own a shareable with that ID.";

/// POST /api/me/shareables
///
/// Creates a shareable owned by the caller. Description and type are
/// required; everything else is optional.
pub async fn create_shareable(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Json(body): Json<NewShareable>,
) -> Result<Json<Shareable>, ApiError> {
    let kind = match body.kind {
        Some(kind) if !body.description.is_empty() => kind,
        _ => {
            return Err(ApiError::invalid_input(
                "Description and type must be provided",
            ))
        }
    };

    let created = db::create(
        &pool,
        account.account_id,
        &body.description,
        body.expiration,
        body.urgent,
        kind,
    )
    .await?;

    tracing::info!(
        "Shareable created by {}: {} ({})",
        account.account_id,
        created.id,
        created.kind.as_str()
    );

    Ok(Json(created))
}

/// GET /api/me/shareables
pub async fn list_own_shareables(
    State(pool): State<PgPool>,
    account: CurrentAccount,
) -> Result<Json<Vec<Shareable>>, ApiError> {
    let shareables = db::list_by_owner(&pool, account.account_id).await?;
    Ok(Json(shareables))
}

/// PUT /api/me/shareables/{id}
///
/// Applies a typed patch, gated on the caller owning the item.
pub async fn update_shareable(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Path(shareable_id): Path<Uuid>,
    Json(patch): Json<ShareablePatch>,
) -> Result<Json<Shareable>, ApiError> {
    let updated = db::update(&pool, shareable_id, account.account_id, &patch)
        .await?
        .ok_or_else(|| ApiError::forbidden(NOT_OWNER))?;

    Ok(Json(updated))
}

/// DELETE /api/me/shareables/{id}
pub async fn delete_shareable(
    State(pool): State<PgPool>,
    account: CurrentAccount,
    Path(shareable_id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !db::delete(&pool, shareable_id, account.account_id).await? {
        return Err(ApiError::forbidden(NOT_OWNER));
    }

    Ok(Json(DeletedResponse { deleted: true }))
}

/// GET /api/me/feed
///
/// Shareables owned by the caller's friends, projected for the feed.
/// The caller's own items never appear (a user is not their own
/// friend).
pub async fn feed(
    State(pool): State<PgPool>,
    account: CurrentAccount,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    let user = profile_db::find_user(&pool, account.account_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found."))?;

    let items = db::feed(&pool, &user.friends).await?;

    Ok(Json(items))
}
