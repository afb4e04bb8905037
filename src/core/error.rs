//! core/error.rs
//! Error taxonomy for batch runs.
//!
//! Only [`Error::Enumerate`] is fatal to a batch. Everything else is attached to
//! one file, logged by the pipeline, and the batch moves on.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// MP3 without an ID3 header. Expected for untagged files.
    #[error("no ID3 tag header in {}", .path.display())]
    NoTagHeader { path: PathBuf },

    /// Container could not be opened with its expected parser.
    #[error("tag read failed for {}: {reason}", .path.display())]
    TagRead { path: PathBuf, reason: String },

    #[error("tag write failed for {}: {reason}", .path.display())]
    TagWrite { path: PathBuf, reason: String },

    /// Rename only knows how to retag a subset of the discovered formats.
    #[error("unsupported format for tag writing: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Directory creation or move failure.
    #[error("filesystem error on {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root itself could not be listed.
    #[error("cannot enumerate {}: {source}", .path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn tag_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::TagRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn tag_write(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::TagWrite {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}
