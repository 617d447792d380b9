//! Media reference models for CDN-delivered images and videos

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resource kind on the media CDN.
///
/// Selects the delivery host path segment only; transform directives
/// apply uniformly to images and video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// URL path segment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Pointer to an image/video asset on the media CDN, as stored on
/// content-store records. Immutable value object; every field may be
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    /// Opaque CDN identifier; required for a non-empty delivery URL.
    /// Contents are trusted to be CDN-safe - no escaping is performed.
    #[serde(default)]
    pub public_id: Option<String>,
    /// Resource kind, image when absent.
    #[serde(default)]
    pub resource_type: Option<MediaKind>,
    /// Encoded format, "webp" when absent.
    #[serde(default)]
    pub format: Option<String>,
    /// Presentational alt text.
    #[serde(default)]
    pub alt: Option<String>,
    /// Presentational caption.
    #[serde(default)]
    pub caption: Option<String>,
}

/// Per-call transform parameters for the media CDN.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transform {
    /// Target width in pixels.
    pub width: Option<u32>,
}

impl Transform {
    pub fn width(width: u32) -> Self {
        Transform { width: Some(width) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_reference() {
        let json = r#"{
            "publicId": "covers/engine",
            "resourceType": "video",
            "format": "mp4",
            "alt": "Engine demo clip"
        }"#;
        let media: MediaReference = serde_json::from_str(json).unwrap();
        assert_eq!(media.public_id.as_deref(), Some("covers/engine"));
        assert_eq!(media.resource_type, Some(MediaKind::Video));
        assert_eq!(media.format.as_deref(), Some("mp4"));
        assert_eq!(media.alt.as_deref(), Some("Engine demo clip"));
        assert!(media.caption.is_none());
    }

    #[test]
    fn test_deserialize_partial_reference() {
        let media: MediaReference = serde_json::from_str("{}").unwrap();
        assert!(media.public_id.is_none());
        assert!(media.resource_type.is_none());
        assert!(media.format.is_none());
    }
}
