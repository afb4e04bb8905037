//! core/extract.rs
//! Field Extractor: per-format precedence rules for album artist + album.
//!
//! The [`FieldRules`] table is the only place that knows which field names a
//! format stores these values under. Field names match what the codec layer
//! puts into [`TagContainer::fields`].

use super::sanitize::sanitize;
use super::types::{Format, NormalizedMetadata, TagContainer, UNKNOWN_ALBUM, UNKNOWN_ARTIST};

/// Field names to consult, in precedence order.
#[derive(Debug)]
pub struct FieldRules {
    pub album_artist: &'static [&'static str],
    pub album: &'static [&'static str],
    pub track_number: &'static [&'static str],
}

const MP3_RULES: FieldRules = FieldRules {
    album_artist: &["albumartist", "performer"],
    album: &["album"],
    track_number: &["tracknumber"],
};

const FLAC_RULES: FieldRules = FieldRules {
    album_artist: &["albumartist", "album artist"],
    album: &["album"],
    track_number: &["tracknumber"],
};

const MP4_RULES: FieldRules = FieldRules {
    album_artist: &["aART", "\u{a9}ART"],
    album: &["\u{a9}alb"],
    track_number: &["trkn"],
};

const OGG_RULES: FieldRules = FieldRules {
    album_artist: &["albumartist", "album_artist", "album artist"],
    album: &["album"],
    track_number: &["tracknumber"],
};

const GENERIC_RULES: FieldRules = FieldRules {
    album_artist: &["albumartist", "album_artist", "album artist", "performer"],
    album: &["album"],
    track_number: &["tracknumber"],
};

impl Format {
    pub fn rules(self) -> &'static FieldRules {
        match self {
            Format::Mp3 => &MP3_RULES,
            Format::Flac => &FLAC_RULES,
            Format::Mp4 => &MP4_RULES,
            Format::Ogg => &OGG_RULES,
            Format::Generic => &GENERIC_RULES,
        }
    }
}

fn first_present<'c>(container: &'c TagContainer, keys: &[&str]) -> Option<&'c str> {
    keys.iter().find_map(|k| container.first_value(k))
}

/// Normalized `{album_artist, album}` for one container. Never empty.
pub fn extract(container: &TagContainer) -> NormalizedMetadata {
    let rules = container.format.rules();

    let album_artist = first_present(container, rules.album_artist).unwrap_or(UNKNOWN_ARTIST);
    let album = first_present(container, rules.album).unwrap_or(UNKNOWN_ALBUM);

    NormalizedMetadata {
        album_artist: sanitize(album_artist),
        album: sanitize(album),
    }
}

/// Track number stored in the container, if any (verbatim, not split).
pub fn embedded_track_number(container: &TagContainer) -> Option<&str> {
    first_present(container, container.format.rules().track_number)
}
