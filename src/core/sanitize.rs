//! core/sanitize.rs
//! Turn arbitrary tag text into a label that is safe as a directory name.

const FORBIDDEN: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

pub const UNKNOWN_LABEL: &str = "Unknown";

/// Replace forbidden characters with `_`, collapse whitespace runs, trim.
/// Never returns an empty string.
pub fn sanitize(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        collapsed
    }
}
