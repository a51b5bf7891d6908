//! Database operations for profiles and friendships
//!
//! One row per profile; the `friends` and `pending_friends` sequences are
//! UUID array columns mutated with guarded `array_append`/`array_remove`
//! statements, so each single-row update is atomic and set-semantic (no
//! duplicates, idempotent re-adds). Mutations that span two rows
//! (confirm, unfriend) or touch several tables (profile deletion) run in
//! a transaction.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::backend::profile::types::{Availability, FriendSummary, User, UserPatch, Weekday};

const USER_COLUMNS: &str = "id, first_name, last_name, picture_url, contact, \
     availability_notes, availability_days, friends, pending_friends";

fn user_from_row(row: &PgRow) -> User {
    let notes: Option<String> = row.get("availability_notes");
    let days: Option<Vec<String>> = row.get("availability_days");

    let availability = match (notes, days) {
        (None, None) => None,
        (notes, days) => Some(Availability {
            notes,
            days: days
                .unwrap_or_default()
                .iter()
                .filter_map(|name| Weekday::from_name(name))
                .collect(),
        }),
    };

    User {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        picture_url: row.get("picture_url"),
        contact: row.get("contact"),
        availability,
        friends: row.get("friends"),
        pending_friends: row.get("pending_friends"),
    }
}

fn day_names(availability: &Availability) -> Vec<String> {
    availability
        .days
        .iter()
        .map(|day| day.as_str().to_string())
        .collect()
}

/// Get a profile by id
pub async fn find_user(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| user_from_row(&r)))
}

/// Apply a typed patch to a profile
///
/// Only the fields present in the patch change. Returns the updated
/// profile, or `None` if the id no longer exists.
pub async fn update_user(
    pool: &PgPool,
    id: Uuid,
    patch: &UserPatch,
) -> Result<Option<User>, sqlx::Error> {
    let set_availability = patch.availability.is_some();
    let notes = patch
        .availability
        .as_ref()
        .and_then(|availability| availability.notes.clone());
    let days = patch.availability.as_ref().map(day_names);

    let row = sqlx::query(&format!(
        r#"
        UPDATE users SET
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            picture_url = COALESCE($4, picture_url),
            contact = COALESCE($5, contact),
            availability_notes = CASE WHEN $6 THEN $7 ELSE availability_notes END,
            availability_days = CASE WHEN $6 THEN $8 ELSE availability_days END
        WHERE id = $1
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(id)
    .bind(patch.first_name.as_deref())
    .bind(patch.last_name.as_deref())
    .bind(patch.picture_url.as_deref())
    .bind(patch.contact.as_deref())
    .bind(set_availability)
    .bind(notes)
    .bind(days)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| user_from_row(&r)))
}

/// Authorization predicate: does `user_id`'s friends list contain `other`?
pub async fn is_friend(pool: &PgPool, user_id: Uuid, other: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND friends @> ARRAY[$2]::uuid[])",
    )
    .bind(user_id)
    .bind(other)
    .fetch_one(pool)
    .await
}

/// Authorization predicate: has `requester` asked to befriend `user_id`?
pub async fn has_pending_request(
    pool: &PgPool,
    user_id: Uuid,
    requester: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND pending_friends @> ARRAY[$2]::uuid[])",
    )
    .bind(user_id)
    .bind(requester)
    .fetch_one(pool)
    .await
}

/// Record a friend request on the recipient's profile
///
/// Set-add: re-sending an already pending request is a no-op, so the
/// pending list never grows past one entry per requester.
pub async fn add_pending_request(
    pool: &PgPool,
    recipient: Uuid,
    requester: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET pending_friends = array_append(pending_friends, $2)
        WHERE id = $1 AND NOT (pending_friends @> ARRAY[$2]::uuid[])
        "#,
    )
    .bind(recipient)
    .bind(requester)
    .execute(pool)
    .await?;

    Ok(())
}

/// Confirm a pending friend request
///
/// In one transaction: move `requester` from the confirmer's pending
/// list into their friends, and add the confirmer to the requester's
/// friends. Returns the confirmer's updated profile, or `None` if the
/// request vanished between the precondition check and the update.
pub async fn confirm_friend(
    pool: &PgPool,
    user_id: Uuid,
    requester: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query(&format!(
        r#"
        UPDATE users
        SET friends = array_append(friends, $2),
            pending_friends = array_remove(pending_friends, $2)
        WHERE id = $1
          AND pending_friends @> ARRAY[$2]::uuid[]
          AND NOT (friends @> ARRAY[$2]::uuid[])
        RETURNING {}
        "#,
        USER_COLUMNS
    ))
    .bind(user_id)
    .bind(requester)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(row) = row else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query(
        r#"
        UPDATE users
        SET friends = array_append(friends, $2)
        WHERE id = $1 AND NOT (friends @> ARRAY[$2]::uuid[])
        "#,
    )
    .bind(requester)
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(user_from_row(&row)))
}

/// Project profiles to friend summaries
pub async fn friend_summaries(
    pool: &PgPool,
    ids: &[Uuid],
) -> Result<Vec<FriendSummary>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, first_name, last_name, picture_url FROM users WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| FriendSummary {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            picture_url: row.get("picture_url"),
        })
        .collect())
}

/// Remove a friendship from both sides
///
/// Both removals must match a row holding the relation; otherwise the
/// transaction rolls back and `false` is returned.
pub async fn unfriend(pool: &PgPool, user_id: Uuid, friend_id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let own_side = sqlx::query(
        r#"
        UPDATE users
        SET friends = array_remove(friends, $2)
        WHERE id = $1 AND friends @> ARRAY[$2]::uuid[]
        "#,
    )
    .bind(user_id)
    .bind(friend_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let other_side = sqlx::query(
        r#"
        UPDATE users
        SET friends = array_remove(friends, $2)
        WHERE id = $1 AND friends @> ARRAY[$2]::uuid[]
        "#,
    )
    .bind(friend_id)
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if own_side == 1 && other_side == 1 {
        tx.commit().await?;
        Ok(true)
    } else {
        tx.rollback().await?;
        Ok(false)
    }
}

/// Delete a profile and everything hanging off it
///
/// In one transaction: the user's shareables, their id in other users'
/// relationship arrays, the profile row, and the account row. Returns
/// `false` if no profile with that id existed.
pub async fn delete_profile(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shareables WHERE owner = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        UPDATE users
        SET friends = array_remove(friends, $1),
            pending_friends = array_remove(pending_friends, $1)
        WHERE friends @> ARRAY[$1]::uuid[] OR pending_friends @> ARRAY[$1]::uuid[]
        "#,
    )
    .bind(user_id)
    .execute(&mut *tx)
    .await?;

    let removed = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(removed == 1)
}
