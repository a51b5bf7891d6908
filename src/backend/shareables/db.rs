//! Database operations for shareables
//!
//! Ownership is enforced in the WHERE clause of every mutation: an
//! update or delete only matches a row whose `owner` is the caller, so
//! a non-owner request simply matches nothing and the handler maps
//! that to the authorization error.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use chrono::{DateTime, Utc};

use crate::backend::shareables::types::{
    FeedItem, FeedOwner, Shareable, ShareableKind, ShareablePatch,
};

const SHAREABLE_COLUMNS: &str = "id, description, expiration, urgent, kind, owner";

fn shareable_from_row(row: &PgRow) -> Shareable {
    let kind: String = row.get("kind");

    Shareable {
        id: row.get("id"),
        description: row.get("description"),
        expiration: row.get("expiration"),
        urgent: row.get("urgent"),
        // The CHECK constraint on the column keeps this total
        kind: ShareableKind::from_name(&kind).unwrap_or(ShareableKind::Requesting),
        owner: row.get("owner"),
    }
}

/// Insert a shareable owned by `owner`
pub async fn create(
    pool: &PgPool,
    owner: Uuid,
    description: &str,
    expiration: Option<DateTime<Utc>>,
    urgent: Option<bool>,
    kind: ShareableKind,
) -> Result<Shareable, sqlx::Error> {
    let id = Uuid::new_v4();

    let row = sqlx::query(&format!(
        r#"
        INSERT INTO shareables (id, description, expiration, urgent, kind, owner)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        SHAREABLE_COLUMNS
    ))
    .bind(id)
    .bind(description)
    .bind(expiration)
    .bind(urgent)
    .bind(kind.as_str())
    .bind(owner)
    .fetch_one(pool)
    .await?;

    Ok(shareable_from_row(&row))
}

/// All shareables owned by `owner`
pub async fn list_by_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Shareable>, sqlx::Error> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM shareables WHERE owner = $1",
        SHAREABLE_COLUMNS
    ))
    .bind(owner)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(shareable_from_row).collect())
}

/// Apply a typed patch to a shareable, gated on ownership
///
/// Returns `None` when no row with that id and owner exists.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    patch: &ShareablePatch,
) -> Result<Option<Shareable>, sqlx::Error> {
    let row = sqlx::query(&format!(
        r#"
        UPDATE shareables SET
            description = COALESCE($3, description),
            expiration = COALESCE($4, expiration),
            urgent = COALESCE($5, urgent),
            kind = COALESCE($6, kind)
        WHERE id = $1 AND owner = $2
        RETURNING {}
        "#,
        SHAREABLE_COLUMNS
    ))
    .bind(id)
    .bind(owner)
    .bind(patch.description.as_deref())
    .bind(patch.expiration)
    .bind(patch.urgent)
    .bind(patch.kind.map(|kind| kind.as_str()))
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| shareable_from_row(&r)))
}

/// Delete a shareable, gated on ownership
///
/// Returns `false` when no row with that id and owner exists.
pub async fn delete(pool: &PgPool, id: Uuid, owner: Uuid) -> Result<bool, sqlx::Error> {
    let removed = sqlx::query("DELETE FROM shareables WHERE id = $1 AND owner = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?
        .rows_affected();

    Ok(removed == 1)
}

/// Feed query: every shareable owned by any of `friend_ids`
///
/// Projected to urgency plus the owning friend's id and first name.
/// Store-natural order, no pagination.
pub async fn feed(pool: &PgPool, friend_ids: &[Uuid]) -> Result<Vec<FeedItem>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.urgent, u.id AS owner_id, u.first_name
        FROM shareables s
        JOIN users u ON u.id = s.owner
        WHERE s.owner = ANY($1)
        "#,
    )
    .bind(friend_ids)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| FeedItem {
            id: row.get("id"),
            urgent: row.get("urgent"),
            owner: FeedOwner {
                id: row.get("owner_id"),
                first_name: row.get("first_name"),
            },
        })
        .collect())
}
