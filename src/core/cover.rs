//! core/cover.rs
//! Cover Policy: strip every embedded picture, then optionally insert the
//! batch's shared cover. Never merges.

use super::types::CoverDecision;

/// MIME type written with the shared cover.
pub const COVER_MIME: &str = "image/jpeg";
/// Description written with the shared cover.
pub const COVER_DESCRIPTION: &str = "Cover";

/// Decide what happens to one file's pictures.
///
/// `shared_cover` is the same for every file in a batch; an empty buffer
/// counts as no cover.
pub fn decide(shared_cover: Option<&[u8]>, current_pictures: usize) -> CoverDecision<'_> {
    match shared_cover.filter(|bytes| !bytes.is_empty()) {
        Some(image) => CoverDecision::Replace {
            existing: current_pictures,
            image,
        },
        None if current_pictures > 0 => CoverDecision::Remove {
            existing: current_pictures,
        },
        None => CoverDecision::NoChange,
    }
}
