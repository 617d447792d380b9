//! Delivery URL construction for the media CDN.
//!
//! Given a [`MediaReference`] from the content store and optional
//! transform parameters, builds the fully-qualified delivery URL for
//! the asset. Unusable input - a missing identifier or an unconfigured
//! delivery account - degrades to an empty string, which callers treat
//! as "no media to render".

use crate::config::MediaDeliveryConfig;
use crate::models::{MediaReference, Transform};

const DELIVERY_HOST: &str = "https://res.cloudinary.com";
const DEFAULT_FORMAT: &str = "webp";

impl MediaDeliveryConfig {
    /// Build the delivery URL for `media`, or `""` when the reference
    /// cannot be resolved. Never fails; pure in its inputs.
    ///
    /// Example output:
    /// `https://res.cloudinary.com/demo/image/upload/w_900,q_auto,f_auto/covers/engine.webp`
    pub fn delivery_url(&self, media: &MediaReference, transform: Option<&Transform>) -> String {
        let Some(cloud_name) = self.cloud_name.as_deref().filter(|c| !c.is_empty()) else {
            return String::new();
        };
        let Some(public_id) = media.public_id.as_deref().filter(|id| !id.is_empty()) else {
            return String::new();
        };

        let kind = media.resource_type.unwrap_or_default();
        let format = media
            .format
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FORMAT);

        // The width directive must precede the auto directives so the
        // CDN applies sizing before re-encoding.
        let mut directives: Vec<String> = Vec::new();
        if let Some(width) = transform.and_then(|t| t.width) {
            directives.push(format!("w_{}", width));
        }
        directives.push("q_auto".to_string());
        directives.push("f_auto".to_string());

        let segments = [
            format!("{}/{}/{}/upload", DELIVERY_HOST, cloud_name, kind.as_str()),
            directives.join(","),
            format!("{}.{}", public_id, format),
        ];

        segments
            .iter()
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn demo_config() -> MediaDeliveryConfig {
        MediaDeliveryConfig {
            cloud_name: Some("demo".to_string()),
        }
    }

    fn reference(public_id: &str) -> MediaReference {
        MediaReference {
            public_id: Some(public_id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_public_id_yields_empty_url() {
        let config = demo_config();
        assert_eq!(config.delivery_url(&MediaReference::default(), None), "");
        assert_eq!(config.delivery_url(&reference(""), None), "");
    }

    #[test]
    fn test_unconfigured_cloud_name_yields_empty_url() {
        let config = MediaDeliveryConfig { cloud_name: None };
        assert_eq!(config.delivery_url(&reference("abc123"), None), "");

        let config = MediaDeliveryConfig {
            cloud_name: Some(String::new()),
        };
        assert_eq!(config.delivery_url(&reference("abc123"), None), "");
    }

    #[test]
    fn test_defaults_to_image_and_webp() {
        let url = demo_config().delivery_url(&reference("abc123"), None);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/q_auto,f_auto/abc123.webp"
        );
    }

    #[test]
    fn test_width_directive() {
        let url = demo_config().delivery_url(&reference("abc123"), Some(&Transform::width(900)));
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/w_900,q_auto,f_auto/abc123.webp"
        );
    }

    #[test]
    fn test_video_kind_changes_host_segment_only() {
        let media = MediaReference {
            public_id: Some("clip1".to_string()),
            resource_type: Some(MediaKind::Video),
            format: Some("mp4".to_string()),
            ..Default::default()
        };
        let url = demo_config().delivery_url(&media, Some(&Transform::width(1200)));
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/w_1200,q_auto,f_auto/clip1.mp4"
        );
    }

    #[test]
    fn test_width_precedes_auto_directives() {
        for width in [1, 320, 900, 1200, 4096] {
            let url =
                demo_config().delivery_url(&reference("abc123"), Some(&Transform::width(width)));
            let directives = url
                .split('/')
                .find(|segment| segment.contains("q_auto"))
                .unwrap();
            assert_eq!(directives, format!("w_{},q_auto,f_auto", width));
        }
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let config = demo_config();
        let media = reference("abc123");
        let transform = Transform::width(900);
        assert_eq!(
            config.delivery_url(&media, Some(&transform)),
            config.delivery_url(&media, Some(&transform))
        );
    }

    #[test]
    fn test_transform_without_width_falls_back_to_auto_directives() {
        let url = demo_config().delivery_url(&reference("abc123"), Some(&Transform::default()));
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/q_auto,f_auto/abc123.webp"
        );
    }
}
