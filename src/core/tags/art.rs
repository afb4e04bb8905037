//! core/tags/art.rs
//! Picture plumbing for both codecs: load the shared cover, and carry out a
//! [`CoverDecision`] on an in-memory tag.

use std::io::ErrorKind;
use std::path::Path;

use id3::TagLike;
use id3::frame::{Picture, PictureType};
use lofty::picture::{MimeType, Picture as LoftyPicture, PictureType as LoftyPictureType};

use super::super::cover::{COVER_DESCRIPTION, COVER_MIME};
use super::super::error::{Error, Result};
use super::super::types::{ArtChange, CoverDecision};

/// Raw bytes of the shared cover, or `None` if the file does not exist.
pub fn read_cover_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::filesystem(path, e)),
    }
}

pub(crate) fn id3_picture_count(tag: &id3::Tag) -> usize {
    tag.frames()
        .filter(|f| f.id() == "APIC" || f.id() == "PIC")
        .count()
}

pub(crate) fn apply_to_id3(tag: &mut id3::Tag, decision: CoverDecision<'_>) -> ArtChange {
    let (removed, image) = match decision {
        CoverDecision::NoChange => return ArtChange::default(),
        CoverDecision::Remove { existing } => (existing, None),
        CoverDecision::Replace { existing, image } => (existing, Some(image)),
    };

    // TagLike::remove returns Vec<Frame>; discard it
    let _ = tag.remove("APIC");
    let _ = tag.remove("PIC");

    if let Some(data) = image {
        let _ = tag.add_frame(Picture {
            mime_type: COVER_MIME.to_string(),
            picture_type: PictureType::CoverFront,
            description: COVER_DESCRIPTION.to_string(),
            data: data.to_vec(),
        });
    }

    ArtChange {
        removed,
        added: image.is_some(),
    }
}

pub(crate) fn apply_to_lofty(tag: &mut lofty::tag::Tag, decision: CoverDecision<'_>) -> ArtChange {
    let (removed, image) = match decision {
        CoverDecision::NoChange => return ArtChange::default(),
        CoverDecision::Remove { existing } => (existing, None),
        CoverDecision::Replace { existing, image } => (existing, Some(image)),
    };

    while !tag.pictures().is_empty() {
        let _ = tag.remove_picture(0);
    }

    if let Some(data) = image {
        tag.push_picture(LoftyPicture::new_unchecked(
            LoftyPictureType::CoverFront,
            Some(MimeType::Jpeg),
            Some(COVER_DESCRIPTION.to_string()),
            data.to_vec(),
        ));
    }

    ArtChange {
        removed,
        added: image.is_some(),
    }
}
