//! Shared application state.

use std::sync::Arc;

use devlog_content::ContentStore;
use devlog_core::MediaDeliveryConfig;

/// State shared by all handlers: the content store behind its trait
/// seam, and the media CDN account used to resolve delivery URLs.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub media: MediaDeliveryConfig,
}
