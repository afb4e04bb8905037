//! core/tags/read.rs
//! Load a file's tags into a [`TagContainer`].
//!
//! Field naming per format:
//! - MP3 (id3): easy names `album`, `albumartist`, `performer`, `title`,
//!   `tracknumber` mapped from TALB / TPE2 / TPE1 / TIT2 / TRCK.
//! - FLAC / OGG (lofty, Vorbis comments): raw comment keys, lower-cased.
//!   Read from the native comment block so `ALBUM ARTIST` and `ALBUMARTIST`
//!   stay distinct.
//! - MP4 (lofty, ilst): native atom names (`aART`, `©ART`, `©alb`) plus `trkn`.
//! - Anything else (lofty): native keys plus the easy-name aliases above.

use std::io::{Seek, SeekFrom};
use std::path::Path;

use id3::Tag;
use lofty::config::ParseOptions;
use lofty::error::LoftyError;
use lofty::file::{AudioFile, FileType, TaggedFileExt};
use lofty::flac::FlacFile;
use lofty::ogg::{OpusFile, SpeexFile, VorbisComments, VorbisFile};
use lofty::probe::Probe;
use lofty::tag::ItemKey;

use super::super::error::{Error, Result};
use super::super::types::{Format, TagContainer};
use super::util::{split_multi, text_frame};

/// Easy name -> ID3v2 frame id.
const ID3_FIELDS: [(&str, &str); 5] = [
    ("album", "TALB"),
    ("albumartist", "TPE2"),
    ("performer", "TPE1"),
    ("title", "TIT2"),
    ("tracknumber", "TRCK"),
];

/// Read `path` with the parser its extension calls for.
///
/// An MP3 without an ID3 header yields [`Error::NoTagHeader`]; a file that
/// does not probe as the expected container yields [`Error::TagRead`].
pub fn read_container(path: &Path) -> Result<TagContainer> {
    match Format::from_path(path) {
        Format::Mp3 => read_id3(path),
        format @ (Format::Flac | Format::Ogg) => read_vorbis(path, format),
        format => read_lofty(path, format),
    }
}

fn read_id3(path: &Path) -> Result<TagContainer> {
    let tag = match Tag::read_from_path(path) {
        Ok(t) => t,
        Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => {
            return Err(Error::NoTagHeader {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(Error::tag_read(path, e)),
    };

    Ok(container_from_id3(&tag))
}

fn container_from_id3(tag: &Tag) -> TagContainer {
    let mut container = TagContainer::new(Format::Mp3);

    for (name, id) in ID3_FIELDS {
        if let Some(value) = text_frame(tag, id) {
            for v in split_multi(&value) {
                container.push_field(name, v);
            }
        }
    }

    container
}

fn expected_file_type(format: Format, found: FileType) -> bool {
    match format {
        Format::Flac => found == FileType::Flac,
        Format::Mp4 => found == FileType::Mp4,
        Format::Ogg => matches!(found, FileType::Vorbis | FileType::Opus | FileType::Speex),
        Format::Mp3 | Format::Generic => true,
    }
}

fn push_vorbis_comments(container: &mut TagContainer, comments: &VorbisComments) {
    for (key, value) in comments.items() {
        container.push_field(&key.to_lowercase(), value);
    }
}

fn read_vorbis(path: &Path, format: Format) -> Result<TagContainer> {
    let probe = Probe::open(path)
        .map_err(|e| Error::tag_read(path, e))?
        .guess_file_type()
        .map_err(|e| Error::tag_read(path, e))?;

    let file_type = probe
        .file_type()
        .ok_or_else(|| Error::tag_read(path, "unrecognized container"))?;
    if !expected_file_type(format, file_type) {
        return Err(Error::tag_read(
            path,
            format!("expected {format:?} container, found {file_type:?}"),
        ));
    }

    let mut reader = probe.into_inner();
    reader.seek(SeekFrom::Start(0)).map_err(|e| Error::tag_read(path, e))?;

    let options = ParseOptions::new().read_properties(false);
    let read_err = |e: LoftyError| Error::tag_read(path, e);
    let mut container = TagContainer::new(format);

    match file_type {
        FileType::Flac => {
            let flac = FlacFile::read_from(&mut reader, options).map_err(read_err)?;
            if let Some(comments) = flac.vorbis_comments() {
                push_vorbis_comments(&mut container, comments);
            }
        }
        FileType::Vorbis => {
            let ogg = VorbisFile::read_from(&mut reader, options).map_err(read_err)?;
            push_vorbis_comments(&mut container, ogg.vorbis_comments());
        }
        FileType::Opus => {
            let ogg = OpusFile::read_from(&mut reader, options).map_err(read_err)?;
            push_vorbis_comments(&mut container, ogg.vorbis_comments());
        }
        FileType::Speex => {
            let ogg = SpeexFile::read_from(&mut reader, options).map_err(read_err)?;
            push_vorbis_comments(&mut container, ogg.vorbis_comments());
        }
        _ => {}
    }

    Ok(container)
}

/// Easy-name alias for well-known items in generic containers.
fn generic_alias(key: &ItemKey) -> Option<&'static str> {
    match key {
        ItemKey::AlbumArtist => Some("albumartist"),
        ItemKey::Performer => Some("performer"),
        ItemKey::AlbumTitle => Some("album"),
        ItemKey::TrackTitle => Some("title"),
        ItemKey::TrackNumber => Some("tracknumber"),
        _ => None,
    }
}

fn read_lofty(path: &Path, format: Format) -> Result<TagContainer> {
    let tagged_file = lofty::read_from_path(path).map_err(|e| Error::tag_read(path, e))?;

    let file_type = tagged_file.file_type();
    if !expected_file_type(format, file_type) {
        return Err(Error::tag_read(
            path,
            format!("expected {format:?} container, found {file_type:?}"),
        ));
    }

    let mut container = TagContainer::new(format);

    let Some(tag) = tagged_file
        .primary_tag()
        .or_else(|| tagged_file.first_tag())
    else {
        return Ok(container);
    };

    let tag_type = tag.tag_type();

    for item in tag.items() {
        let Some(text) = item.value().text() else {
            continue;
        };

        if let Some(key) = item.key().map_key(tag_type, true) {
            container.push_field(key, text);
        }

        if format == Format::Generic {
            if let Some(alias) = generic_alias(item.key()) {
                container.push_field(alias, text);
            }
        }
    }

    // ilst keeps trkn as a number pair, so it has no text key of its own.
    let track_key = format.rules().track_number[0];
    if !container.fields.contains_key(track_key) {
        if let Some(n) = tag.get_string(&ItemKey::TrackNumber) {
            container.push_field(track_key, n);
        }
    }

    Ok(container)
}
