//! core/track.rs
//! Track Resolver: one track number + title per file in a batch.
//!
//! Number sources, strongest first:
//! 1. track number already embedded in the file (text before any `/`)
//! 2. `NN-` prefix of the file name
//! 3. positional counter over the files that have neither, in name order
//!
//! The title never depends on which source won; it is always derived from the
//! file name.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{ResolvedTrack, TrackLabel};

// `\d` is Unicode-aware, so any decimal digit run counts as a prefix.
static NUMBERED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)-(.+)").expect("numbered-name pattern is valid"));

/// Split `"03-Some-Song.mp3"` into `("03", "Some-Song.mp3")`.
fn split_numbered(file_name: &str) -> Option<(&str, &str)> {
    let caps = NUMBERED_NAME.captures(file_name)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// `"007"` -> `"7"`, `"00"` -> `"0"`.
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}

fn strip_extension(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

/// Part of an embedded track number before `/` (`"3/12"` -> `"3"`).
/// Blank results count as "no embedded number".
pub fn embedded_part(raw: &str) -> Option<&str> {
    let head = raw.split('/').next().unwrap_or(raw);
    if head.trim().is_empty() {
        None
    } else {
        Some(head)
    }
}

/// Build the resolver input for one file.
pub fn label_for(file_name: &str, embedded: Option<&str>) -> TrackLabel {
    TrackLabel {
        file_name: file_name.to_string(),
        explicit_number: split_numbered(file_name)
            .map(|(digits, _)| strip_leading_zeros(digits).to_string()),
        embedded_number: embedded.map(str::to_owned),
    }
}

/// Title from the file name alone.
///
/// - `"03-Some-Song.mp3"` -> `"Some Song"`
/// - `"Some-Song.mp3"` -> `"Some-Song"`
pub fn derive_title(file_name: &str) -> String {
    match split_numbered(file_name) {
        Some((_, rest)) => strip_extension(rest).replace('-', " "),
        None => strip_extension(file_name).to_string(),
    }
}

/// Resolve a whole batch. Output is in file-name order.
pub fn resolve(batch: &[TrackLabel]) -> Vec<ResolvedTrack> {
    let mut ordered: Vec<&TrackLabel> = batch.iter().collect();
    ordered.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let mut next_position: u32 = 1;
    let mut out = Vec::with_capacity(ordered.len());

    for label in ordered {
        let embedded = label.embedded_number.as_deref().and_then(embedded_part);

        let track_number = match (embedded, label.explicit_number.as_deref()) {
            (Some(n), _) => n.to_string(),
            (None, Some(n)) => n.to_string(),
            (None, None) => {
                let n = next_position.to_string();
                next_position += 1;
                n
            }
        };

        out.push(ResolvedTrack {
            file_name: label.file_name.clone(),
            track_number,
            title: derive_title(&label.file_name),
        });
    }

    out
}
