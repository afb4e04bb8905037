//! core/config.rs
//! Batch settings handed to the pipelines. Built by `main` from CLI flags.

use std::path::PathBuf;

/// Name of the shared cover image looked up in the batch root.
pub const DEFAULT_COVER_FILE: &str = "Pochette.jpg";

/// Extensions the rename batch picks up.
pub const RENAME_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "ogg", "wav"];

/// Extensions the reorder batch picks up.
pub const REORDER_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "aac", "ogg", "wav"];

#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the files; also the root of the reorder layout.
    pub root: PathBuf,
    /// Cover file name, resolved against `root`.
    pub cover_file: String,
}

impl BatchConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cover_file: DEFAULT_COVER_FILE.to_string(),
        }
    }

    pub fn with_cover_file(mut self, name: impl Into<String>) -> Self {
        self.cover_file = name.into();
        self
    }

    pub fn cover_path(&self) -> PathBuf {
        self.root.join(&self.cover_file)
    }
}
