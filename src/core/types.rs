//! Core data types shared between the reconciliation rules and the pipelines.
//!
//! Rule of thumb:
//! - These structs should be "boring bags of data"
//! - No filesystem code
//! - No tag parsing code
//!
//! The codec layer (`core::tags`) fills a [`TagContainer`], the rules turn it
//! into the other types here, and the pipelines act on the results.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Tag container flavour. Picked from the file extension, which also decides
/// which parser is "expected" for the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Mp3,
    Flac,
    /// MP4/M4A, and `.aac` which is handed to the MP4 parser.
    Mp4,
    Ogg,
    Generic,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("mp3") => Format::Mp3,
            Some("flac") => Format::Flac,
            Some("m4a") | Some("aac") => Format::Mp4,
            Some("ogg") => Format::Ogg,
            _ => Format::Generic,
        }
    }
}

/// Read-only view of one file's embedded text metadata.
///
/// `fields` maps the codec's field name (see `core::tags::read` for the
/// per-format naming) to every value stored under it. Pictures are counted
/// by the writer on the tag it is about to rewrite.
#[derive(Debug, Clone)]
pub struct TagContainer {
    pub format: Format,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl TagContainer {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            fields: BTreeMap::new(),
        }
    }

    #[cfg(test)]
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.push_field(key, value);
        self
    }

    pub fn push_field(&mut self, key: &str, value: &str) {
        self.fields
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// First value under `key`, if the key exists AND that value is not blank.
    ///
    /// A present-but-empty list is treated the same as a missing key.
    pub fn first_value(&self, key: &str) -> Option<&str> {
        let first = self.fields.get(key)?.first()?;
        if first.trim().is_empty() {
            None
        } else {
            Some(first.as_str())
        }
    }
}

/// The two fields the reorder layout is built from. Always sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMetadata {
    pub album_artist: String,
    pub album: String,
}

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

impl Default for NormalizedMetadata {
    fn default() -> Self {
        Self {
            album_artist: UNKNOWN_ARTIST.to_string(),
            album: UNKNOWN_ALBUM.to_string(),
        }
    }
}

/// Input to track resolution for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLabel {
    pub file_name: String,
    /// Numeric `NN-` prefix of the file name.
    pub explicit_number: Option<String>,
    /// Track number already stored in the file's tags.
    pub embedded_number: Option<String>,
}

/// Final numbering + title for one file, consumed by the tag writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTrack {
    pub file_name: String,
    pub track_number: String,
    pub title: String,
}

/// What to do with a file's embedded pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverDecision<'a> {
    /// Strip `existing` pictures, insert nothing.
    Remove { existing: usize },
    /// Strip `existing` pictures, then insert the shared cover.
    Replace { existing: usize, image: &'a [u8] },
    NoChange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub artist_dir: String,
    pub album_dir: String,
    /// `artist_dir/album_dir/file_name`, relative to the batch root.
    pub destination: PathBuf,
    pub collision: bool,
}

/// Text fields rename writes into every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUpdate {
    pub album: String,
    pub album_artist: String,
    pub title: String,
    pub track_number: String,
}

/// What happened to the pictures of one file during a write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtChange {
    pub removed: usize,
    pub added: bool,
}

/// Per-run counters, logged as the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension_case_insensitively() {
        assert_eq!(Format::from_path(Path::new("a.MP3")), Format::Mp3);
        assert_eq!(Format::from_path(Path::new("a.flac")), Format::Flac);
        assert_eq!(Format::from_path(Path::new("a.m4a")), Format::Mp4);
        assert_eq!(Format::from_path(Path::new("a.aac")), Format::Mp4);
        assert_eq!(Format::from_path(Path::new("a.Ogg")), Format::Ogg);
        assert_eq!(Format::from_path(Path::new("a.wav")), Format::Generic);
        assert_eq!(Format::from_path(Path::new("noext")), Format::Generic);
    }

    #[test]
    fn empty_list_and_blank_value_count_as_missing() {
        let mut c = TagContainer::new(Format::Flac).with_field("album", "  ");
        c.fields.insert("albumartist".into(), Vec::new());

        assert_eq!(c.first_value("album"), None);
        assert_eq!(c.first_value("albumartist"), None);
        assert_eq!(c.first_value("missing"), None);
    }

    #[test]
    fn first_value_takes_the_first_entry() {
        let c = TagContainer::new(Format::Ogg)
            .with_field("album", "One")
            .with_field("album", "Two");
        assert_eq!(c.first_value("album"), Some("One"));
    }
}
