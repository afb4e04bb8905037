//! core/placement.rs
//! Placement Planner: `<artist>/<album>/<file>` plus a collision check.
//!
//! Collisions are reported, never resolved: the caller skips the file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::sanitize::sanitize;
use super::types::{NormalizedMetadata, PlacementResult};

/// Set of destinations already taken, relative to the batch root.
pub trait EntryIndex {
    fn contains(&self, destination: &Path) -> bool;
}

#[cfg(test)]
impl EntryIndex for HashSet<PathBuf> {
    fn contains(&self, destination: &Path) -> bool {
        HashSet::contains(self, destination)
    }
}

/// Entries taken either on disk under `root` or by an earlier move in this run.
#[derive(Debug)]
pub struct OnDiskEntries {
    root: PathBuf,
    moved: HashSet<PathBuf>,
}

impl OnDiskEntries {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            moved: HashSet::new(),
        }
    }

    /// Record a successful move.
    pub fn insert(&mut self, destination: PathBuf) {
        self.moved.insert(destination);
    }
}

impl EntryIndex for OnDiskEntries {
    fn contains(&self, destination: &Path) -> bool {
        self.moved.contains(destination) || self.root.join(destination).exists()
    }
}

/// Sanitized directory label. `.` and `..` would escape the layout, so
/// dot-only labels get their dots replaced.
fn dir_label(raw: &str) -> String {
    let label = sanitize(raw);
    if label.chars().all(|c| c == '.') {
        label.replace('.', "_")
    } else {
        label
    }
}

pub fn plan(
    metadata: &NormalizedMetadata,
    file_name: &str,
    existing: &impl EntryIndex,
) -> PlacementResult {
    let artist_dir = dir_label(&metadata.album_artist);
    let album_dir = dir_label(&metadata.album);

    let destination: PathBuf = [artist_dir.as_str(), album_dir.as_str(), file_name]
        .iter()
        .collect();
    let collision = existing.contains(&destination);

    PlacementResult {
        artist_dir,
        album_dir,
        destination,
        collision,
    }
}
