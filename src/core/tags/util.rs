//! core/tags/util.rs
//! Small helpers shared by tag reading/writing.

use id3::frame::Content;
use id3::{Tag, TagLike};

/// Get a best-effort string value from a frame id.
/// Some frames that are "text-ish" may not be `Content::Text`.
pub(crate) fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => Some(s.clone()),
        Content::Link(s) => Some(s.clone()),
        _ => None,
    }
}

/// ID3v2.4 packs multiple values into one frame, separated by NUL.
pub(crate) fn split_multi(value: &str) -> impl Iterator<Item = &str> {
    value.split('\0')
}

/// `Some(s)` unless `s` is empty or whitespace.
pub(crate) fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}
