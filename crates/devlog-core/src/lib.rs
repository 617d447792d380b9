//! Core types for the devlog service: configuration, errors, domain
//! models, and media CDN URL construction.

pub mod config;
pub mod error;
mod media_url;
pub mod models;

pub use config::{Config, ContentStoreConfig, MediaDeliveryConfig, ServerConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{Devlog, MediaKind, MediaReference, Transform};
