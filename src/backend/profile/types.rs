/**
 * Profile Types
 *
 * User profile model plus the request/response types for the profile
 * and friendship endpoints. Wire names are camelCase to match the
 * client (`firstName`, `pendingFriends`, ...).
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::shareables::types::Shareable;

/// Day of the week, serialized lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sunday" => Some(Self::Sunday),
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            _ => None,
        }
    }
}

/// Availability window on a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Availability {
    pub notes: Option<String>,
    #[serde(default)]
    pub days: Vec<Weekday>,
}

/// User profile
///
/// Shares its id with the owning account. `friends` is kept symmetric by
/// the friendship operations; `pending_friends` holds the ids of users
/// who asked to befriend this one. Neither sequence is patchable through
/// profile updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
    pub contact: Option<String>,
    pub availability: Option<Availability>,
    pub friends: Vec<Uuid>,
    pub pending_friends: Vec<Uuid>,
}

/// Typed partial update for a profile
///
/// The allow-list of mutable fields. Relationship arrays have no field
/// here, so a patch body carrying `friends` or `pendingFriends` simply
/// drops them; those sequences change only through the friendship
/// operations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub picture_url: Option<String>,
    pub contact: Option<String>,
    pub availability: Option<Availability>,
}

/// Friend entry projected for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
}

/// A profile with its shareables embedded
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub shareables: Vec<Shareable>,
}

/// Friend and pending-friend lists
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsResponse {
    pub friends: Vec<FriendSummary>,
    pub pending_friends: Vec<FriendSummary>,
}

/// Friend request body, keyed by the recipient's email
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FriendRequestBody {
    #[serde(default)]
    pub email: String,
}

/// Acknowledgement for a delivered friend request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestReceivedResponse {
    pub request_received: bool,
}

/// Acknowledgement for a removal
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
