//! The seam between the HTTP service and the external content store.

use async_trait::async_trait;
use devlog_core::{AppError, Devlog};

/// Read-only access to published devlog records.
///
/// Handlers depend on this trait rather than the concrete client so
/// they can be exercised against an in-memory store in tests.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All published devlogs, ordered by publish date descending.
    async fn list_devlogs(&self) -> Result<Vec<Devlog>, AppError>;

    /// One published devlog by slug, including its rich-content body.
    /// `None` when no entry matches.
    async fn devlog_by_slug(&self, slug: &str) -> Result<Option<Devlog>, AppError>;
}
