//! Resource domain — free downloads.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// A downloadable resource from `GET /resources`.
///
/// `tags` is `None` when the backend omitted the key, so re-encoding never
/// adds it. Unnamed fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ItemId,
    pub title: String,
    pub blurb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Resource {
    /// Tags, empty when none were sent.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_deserialize() {
        let json = r#"{
            "id": "starter-pack",
            "title": "Automation Starter Pack",
            "blurb": "Ten workflows to copy.",
            "tags": ["automation", "free"]
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.id, ItemId::from("starter-pack"));
        assert!(resource.has_tag("free"));
        assert!(!resource.has_tag("paid"));
    }

    #[test]
    fn test_missing_tags_stay_missing() {
        let body = json!({"id": 3, "title": "Checklist", "blurb": "One page."});
        let resource: Resource = serde_json::from_value(body.clone()).unwrap();
        assert!(resource.tags.is_none());
        assert!(resource.tags().is_empty());
        assert_eq!(serde_json::to_value(&resource).unwrap(), body);
    }

    #[test]
    fn test_empty_tags_stay_empty() {
        let body = json!({"id": 4, "title": "Guide", "blurb": "Two pages.", "tags": []});
        let resource: Resource = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resource.tags, Some(vec![]));
        assert_eq!(serde_json::to_value(&resource).unwrap(), body);
    }

    #[test]
    fn test_resource_keeps_unknown_fields() {
        let body = json!({
            "id": 5,
            "title": "Templates",
            "blurb": "Notion pack.",
            "tags": ["free"],
            "download_url": "/d/5",
            "size_kb": 120
        });
        let resource: Resource = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resource.extra["size_kb"], 120);
        assert_eq!(serde_json::to_value(&resource).unwrap(), body);
    }
}
