//! core/rename.rs
//! Rename batch: retag every file in the root with one album + album artist,
//! a resolved track number and title, and the shared cover policy.
//!
//! Pipeline:
//!   (A) load the shared cover once
//!   (B) discover files -> Vec<PathBuf>
//!   (C) read embedded track numbers -> Vec<TrackLabel>
//!   (D) resolve numbers + titles for the whole batch
//!   (E) write tags file by file; failures are logged and counted, never fatal

use std::path::Path;

use tracing::{debug, error, info, warn};

use super::config::{BatchConfig, RENAME_EXTENSIONS};
use super::error::{Error, Result};
use super::extract::embedded_track_number;
use super::library::{file_name_of, scan_music_files};
use super::tags;
use super::track;
use super::types::{BatchReport, TagUpdate, TrackLabel};

/// Values given on the command line for the whole batch.
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub album: String,
    pub album_artist: String,
}

/// Read the shared cover. A missing or unreadable file means "no cover".
fn load_shared_cover(path: &Path) -> Option<Vec<u8>> {
    match tags::read_cover_file(path) {
        Ok(Some(bytes)) => {
            info!("Cover found: {}", path.display());
            Some(bytes)
        }
        Ok(None) => {
            info!(
                "No cover at {}; existing pictures will be removed",
                path.display()
            );
            None
        }
        Err(e) => {
            error!("Failed to read cover: {e}");
            None
        }
    }
}

fn read_embedded_number(path: &Path) -> Option<String> {
    match tags::read_container(path) {
        Ok(container) => embedded_track_number(&container).map(str::to_owned),
        Err(e @ Error::NoTagHeader { .. }) => {
            debug!("{e}");
            None
        }
        Err(e) => {
            warn!("Could not read existing tags: {e}");
            None
        }
    }
}

pub fn run_rename(config: &BatchConfig, request: &RenameRequest) -> Result<BatchReport> {
    let cover = load_shared_cover(&config.cover_path());
    let files = scan_music_files(&config.root, RENAME_EXTENSIONS)?;

    let mut report = BatchReport::default();

    if files.is_empty() {
        info!("No music files found in {}", config.root.display());
        return Ok(report);
    }

    let mut labels: Vec<TrackLabel> = Vec::with_capacity(files.len());
    for path in &files {
        let Some(name) = file_name_of(path) else {
            warn!("Skipping non UTF-8 file name: {}", path.display());
            report.skipped += 1;
            continue;
        };

        let embedded = read_embedded_number(path);
        if let Some(n) = embedded.as_deref().and_then(track::embedded_part) {
            info!("Keeping existing track number ({n}) for: {name}");
        }
        labels.push(track::label_for(name, embedded.as_deref()));
    }

    for resolved in track::resolve(&labels) {
        let path = config.root.join(&resolved.file_name);
        let update = TagUpdate {
            album: request.album.clone(),
            album_artist: request.album_artist.clone(),
            title: resolved.title,
            track_number: resolved.track_number,
        };

        match tags::write_tags(&path, &update, cover.as_deref()) {
            Ok(art) => {
                if art.removed > 0 {
                    info!("Removed {} picture(s) from: {}", art.removed, resolved.file_name);
                }
                if art.added {
                    info!("Added new cover to: {}", resolved.file_name);
                }
                info!(
                    "Updated: {} (track {}, \"{}\")",
                    resolved.file_name, update.track_number, update.title
                );
                report.processed += 1;
            }
            Err(e @ Error::UnsupportedFormat { .. }) => {
                warn!("{e}");
                report.skipped += 1;
            }
            Err(e) => {
                error!("Failed to update {}: {e}", resolved.file_name);
                report.failed += 1;
            }
        }
    }

    info!(
        "Rename finished: {} updated, {} skipped, {} failed",
        report.processed, report.skipped, report.failed
    );

    Ok(report)
}
