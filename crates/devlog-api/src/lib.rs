//! Devlog API Library
//!
//! HTTP surface of the studio site backend: the published-devlog
//! listing and detail endpoints, backed by the headless content store,
//! with media CDN delivery URLs resolved server-side.

// Module declarations
mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
