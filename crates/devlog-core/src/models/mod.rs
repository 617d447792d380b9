//! Domain models: devlog records and the media references they carry.

mod devlog;
mod media;

pub use devlog::Devlog;
pub use media::{MediaKind, MediaReference, Transform};
