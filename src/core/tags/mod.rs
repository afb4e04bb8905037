//! core/tags/mod.rs
//!
//! Codec adapter: `id3` for MP3, `lofty` for everything else.
//! Public API:
//! - [`read_container`] loads a file's tags into a [`TagContainer`](super::types::TagContainer).
//! - [`write_tags`] applies a [`TagUpdate`](super::types::TagUpdate) and the cover policy to disk.
//! - [`read_cover_file`] loads the batch's shared cover image.

mod art;
#[cfg(test)]
pub(crate) mod fixture;
mod read;
mod util;
mod write;

pub use art::read_cover_file;
pub use read::read_container;
pub use write::write_tags;
