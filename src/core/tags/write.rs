//! core/tags/write.rs
//! Write album / album artist / title / track number back to a file and apply
//! the cover policy to its pictures.

use std::path::Path;

use id3::{Tag, TagLike, Version};
use lofty::config::WriteOptions;
use lofty::file::TaggedFileExt;
use lofty::tag::{Accessor, ItemKey, TagExt};

use super::super::cover;
use super::super::error::{Error, Result};
use super::super::types::{ArtChange, Format, TagUpdate};
use super::art::{apply_to_id3, apply_to_lofty, id3_picture_count};
use super::util::non_blank;

/// Formats rename can retag. Everything else is skipped as unsupported.
pub fn supports_writing(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    matches!(ext.as_deref(), Some("mp3" | "flac" | "m4a" | "ogg"))
}

/// Write `update` into `path` and carry out the cover policy.
///
/// Semantics:
/// - album and title are always written
/// - album artist and track number are written only when non-blank
/// - pictures are stripped and optionally replaced by `shared_cover`
pub fn write_tags(
    path: &Path,
    update: &TagUpdate,
    shared_cover: Option<&[u8]>,
) -> Result<ArtChange> {
    if !supports_writing(path) {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    match Format::from_path(path) {
        Format::Mp3 => write_id3(path, update, shared_cover),
        _ => write_lofty(path, update, shared_cover),
    }
}

/// Helper: set a plain text frame (T***) unless the value is blank
fn set_text_non_blank(tag: &mut Tag, id: &str, v: &str) {
    if let Some(s) = non_blank(v) {
        tag.set_text(id, s.to_string());
    }
}

fn write_id3(
    path: &Path,
    update: &TagUpdate,
    shared_cover: Option<&[u8]>,
) -> Result<ArtChange> {
    // Load existing tag if possible; otherwise start fresh.
    let mut tag = Tag::read_from_path(path).unwrap_or_else(|_| Tag::new());

    tag.set_album(update.album.clone()); // TALB
    tag.set_title(update.title.clone()); // TIT2
    set_text_non_blank(&mut tag, "TPE2", &update.album_artist);

    let decision = cover::decide(shared_cover, id3_picture_count(&tag));
    let art = apply_to_id3(&mut tag, decision);

    set_text_non_blank(&mut tag, "TRCK", &update.track_number);

    tag.write_to_path(path, Version::Id3v24)
        .map_err(|e| Error::tag_write(path, e))?;

    Ok(art)
}

fn write_lofty(
    path: &Path,
    update: &TagUpdate,
    shared_cover: Option<&[u8]>,
) -> Result<ArtChange> {
    let mut tagged_file = lofty::read_from_path(path).map_err(|e| Error::tag_write(path, e))?;

    if tagged_file.primary_tag().is_none() {
        let tag_type = tagged_file.primary_tag_type();
        tagged_file.insert_tag(lofty::tag::Tag::new(tag_type));
    }
    let tag = tagged_file
        .primary_tag_mut()
        .ok_or_else(|| Error::tag_write(path, "no writable tag"))?;

    tag.set_album(update.album.clone());
    tag.set_title(update.title.clone());

    if let Some(artist) = non_blank(&update.album_artist) {
        tag.insert_text(ItemKey::AlbumArtist, artist.to_string());
    }

    if let Some(n) = non_blank(&update.track_number) {
        // trkn (MP4) only holds integers; Vorbis comments take any text
        match n.trim().parse::<u32>() {
            Ok(number) => tag.set_track(number),
            Err(_) => {
                tag.insert_text(ItemKey::TrackNumber, n.to_string());
            }
        }
    }

    let decision = cover::decide(shared_cover, tag.pictures().len());
    let art = apply_to_lofty(tag, decision);

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| Error::tag_write(path, e))?;

    Ok(art)
}
