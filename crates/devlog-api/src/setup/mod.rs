//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs so the
//! router can also be assembled by tests.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use devlog_content::SanityClient;
use devlog_core::Config;

use crate::state::AppState;

/// Initialize telemetry, the content-store client, state, and routes.
pub fn initialize_app(config: &Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!(
        project_id = %config.content_store.project_id,
        dataset = %config.content_store.dataset,
        use_cdn = config.content_store.use_cdn,
        "Configuration loaded"
    );

    if config.media.cloud_name.is_none() {
        tracing::warn!("CLOUDINARY_CLOUD_NAME is not set; media delivery URLs will be empty");
    }

    let content =
        SanityClient::new(&config.content_store).context("Failed to create content store client")?;

    let state = Arc::new(AppState {
        content: Arc::new(content),
        media: config.media.clone(),
    });

    let router = routes::setup_routes(config, state.clone())?;

    Ok((state, router))
}
