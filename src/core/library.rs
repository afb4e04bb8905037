//! core/library.rs
//! Flat discovery of music files directly inside a batch root.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};

/// Regular files in `root` (not recursive) whose extension is in `extensions`,
/// sorted by file name.
pub fn scan_music_files(root: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(root).map_err(|source| Error::Enumerate {
        path: root.to_path_buf(),
        source,
    })?;

    let mut out = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| Error::Enumerate {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && has_extension(&path, extensions) {
            out.push(path);
        }
    }

    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// File name as UTF-8, for callers that key on names.
pub fn file_name_of(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}
