//! Devlog records from the content store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::MediaReference;

/// A published devlog entry.
///
/// The content store owns these records; the query projection is the
/// only shape guarantee we get, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Devlog {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Project tag the entry belongs to.
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cover_image: Option<MediaReference>,
    /// Rich-content body, present only in the single-entry projection.
    /// Carried as opaque JSON blocks.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub content: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_projection() {
        let json = r#"{
            "_id": "drafts.0f2a",
            "title": "Engine rewrite notes",
            "slug": "engine-rewrite-notes",
            "excerpt": "What changed and why",
            "project": "untitled-platformer",
            "publishedAt": "2026-01-15T09:30:00Z",
            "coverImage": { "publicId": "covers/engine" }
        }"#;
        let devlog: Devlog = serde_json::from_str(json).unwrap();
        assert_eq!(devlog.id.as_deref(), Some("drafts.0f2a"));
        assert_eq!(devlog.slug.as_deref(), Some("engine-rewrite-notes"));
        assert!(devlog.published_at.is_some());
        assert_eq!(
            devlog
                .cover_image
                .as_ref()
                .and_then(|c| c.public_id.as_deref()),
            Some("covers/engine")
        );
        assert!(devlog.content.is_none());
    }

    #[test]
    fn test_deserialize_empty_record() {
        // The store may return partial records; nothing is required.
        let devlog: Devlog = serde_json::from_str("{}").unwrap();
        assert!(devlog.id.is_none());
        assert!(devlog.title.is_none());
        assert!(devlog.cover_image.is_none());
    }
}
