//! Content-store access for the devlog service.
//!
//! The headless content store is wrapped behind the [`ContentStore`]
//! trait; GROQ query builders, the HTTP client, and response envelope
//! handling live here.

pub mod queries;
mod sanity;
mod store;

pub use sanity::SanityClient;
pub use store::ContentStore;
