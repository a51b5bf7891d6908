/**
 * Shareable Types
 *
 * Shareable item model plus the request/response types for the
 * shareable endpoints and the feed projection. The item kind
 * serializes as `"type"` on the wire.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the owner wants to do with the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareableKind {
    Requesting,
    Giving,
}

impl ShareableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requesting => "requesting",
            Self::Giving => "giving",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "requesting" => Some(Self::Requesting),
            "giving" => Some(Self::Giving),
            _ => None,
        }
    }
}

/// Shareable item
///
/// Owned by the user who created it; mutable and deletable only by
/// that owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shareable {
    pub id: Uuid,
    pub description: String,
    pub expiration: Option<DateTime<Utc>>,
    pub urgent: Option<bool>,
    #[serde(rename = "type")]
    pub kind: ShareableKind,
    pub owner: Uuid,
}

/// Creation body for a shareable
///
/// Description and kind are required; the handler rejects their absence
/// with the mapped 400. The owner is never taken from the body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewShareable {
    #[serde(default)]
    pub description: String,
    pub expiration: Option<DateTime<Utc>>,
    pub urgent: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<ShareableKind>,
}

/// Typed partial update for a shareable
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShareablePatch {
    pub description: Option<String>,
    pub expiration: Option<DateTime<Utc>>,
    pub urgent: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<ShareableKind>,
}

/// Feed entry, projected down to urgency and the owning friend
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: Uuid,
    pub urgent: Option<bool>,
    pub owner: FeedOwner,
}

/// Owner projection embedded in feed entries
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedOwner {
    pub id: Uuid,
    pub first_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ShareableKind::Giving).unwrap(),
            r#""giving""#
        );
        let kind: ShareableKind = serde_json::from_str(r#""requesting""#).unwrap();
        assert_eq!(kind, ShareableKind::Requesting);
    }

    #[test]
    fn test_kind_rides_the_type_field() {
        let body: NewShareable = serde_json::from_str(
            r#"{"description":"Take everything over","urgent":true,"type":"giving"}"#,
        )
        .unwrap();
        assert_eq!(body.kind, Some(ShareableKind::Giving));

        let shareable = Shareable {
            id: Uuid::new_v4(),
            description: "Take everything over".to_string(),
            expiration: None,
            urgent: Some(true),
            kind: ShareableKind::Giving,
            owner: Uuid::new_v4(),
        };
        let value = serde_json::to_value(&shareable).unwrap();
        assert_eq!(value["type"], "giving");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_new_shareable_requires_nothing_at_parse_time() {
        // Validation happens in the handler so the failure maps to the
        // error taxonomy instead of a deserialization rejection.
        let body: NewShareable = serde_json::from_str("{}").unwrap();
        assert!(body.description.is_empty());
        assert!(body.kind.is_none());
    }

    #[test]
    fn test_feed_item_shape() {
        let item = FeedItem {
            id: Uuid::new_v4(),
            urgent: Some(true),
            owner: FeedOwner {
                id: Uuid::new_v4(),
                first_name: "Dany".to_string(),
            },
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["owner"]["firstName"], "Dany");
        assert!(value.get("description").is_none());
    }
}
