//! Devlog listing and detail endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use devlog_core::{AppError, Devlog, MediaDeliveryConfig, MediaReference, Transform};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Cover width on listing cards.
const LIST_COVER_WIDTH: u32 = 900;
/// Cover width on the detail view.
const DETAIL_COVER_WIDTH: u32 = 1200;

/// A devlog as served to the site, with the cover delivery URL resolved.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DevlogResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<MediaReference>,
    /// Resolved CDN URL for the cover; absent when there is no usable media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Rich-content body, only present on the detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub content: Option<serde_json::Value>,
}

impl DevlogResponse {
    fn from_devlog(devlog: Devlog, media: &MediaDeliveryConfig, cover_width: u32) -> Self {
        let cover_url = devlog
            .cover_image
            .as_ref()
            .map(|cover| media.delivery_url(cover, Some(&Transform::width(cover_width))))
            .filter(|url| !url.is_empty());

        DevlogResponse {
            id: devlog.id,
            title: devlog.title,
            slug: devlog.slug,
            excerpt: devlog.excerpt,
            project: devlog.project,
            published_at: devlog.published_at,
            cover_image: devlog.cover_image,
            cover_url,
            content: devlog.content,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/devlogs",
    tag = "devlogs",
    responses(
        (status = 200, description = "Published devlogs, newest first", body = [DevlogResponse]),
        (status = 500, description = "Content store unavailable; body is an empty array", body = [DevlogResponse])
    )
)]
pub async fn list_devlogs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.content.list_devlogs().await {
        Ok(devlogs) => {
            let body: Vec<DevlogResponse> = devlogs
                .into_iter()
                .map(|devlog| DevlogResponse::from_devlog(devlog, &state.media, LIST_COVER_WIDTH))
                .collect();
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            // Fail open: the site renders an empty listing rather than
            // an error page.
            tracing::error!(error = %e, "Failed to fetch devlogs");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Vec::<DevlogResponse>::new()),
            )
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/devlogs/{slug}",
    tag = "devlogs",
    params(
        ("slug" = String, Path, description = "Devlog slug")
    ),
    responses(
        (status = 200, description = "Devlog found", body = DevlogResponse),
        (status = 404, description = "Devlog not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_devlog(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let devlog = state
        .content
        .devlog_by_slug(&slug)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, slug = %slug, "Failed to fetch devlog");
            e
        })?
        .ok_or_else(|| AppError::NotFound("Devlog not found".to_string()))?;

    Ok(Json(DevlogResponse::from_devlog(
        devlog,
        &state.media,
        DETAIL_COVER_WIDTH,
    )))
}
