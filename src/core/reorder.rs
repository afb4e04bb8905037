//! core/reorder.rs
//! Reorder batch: move every file in the root to `<album artist>/<album>/`.
//!
//! Per file: extract metadata -> plan placement -> skip on collision, else move.
//! The only state carried between files is the set of destinations taken so far.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

use super::config::{BatchConfig, REORDER_EXTENSIONS};
use super::error::{Error, Result};
use super::extract::extract;
use super::library::{file_name_of, scan_music_files};
use super::placement::{OnDiskEntries, plan};
use super::tags;
use super::types::{BatchReport, NormalizedMetadata, PlacementResult};

/// Metadata for one file, falling back to defaults when its tags can't be read.
fn metadata_for(path: &Path) -> NormalizedMetadata {
    match tags::read_container(path) {
        Ok(container) => extract(&container),
        Err(e @ Error::NoTagHeader { .. }) => {
            debug!("{e}");
            NormalizedMetadata::default()
        }
        Err(e) => {
            error!("Metadata extraction failed, using defaults: {e}");
            NormalizedMetadata::default()
        }
    }
}

fn move_into_place(root: &Path, source: &Path, placement: &PlacementResult) -> Result<()> {
    let album_dir = root.join(&placement.artist_dir).join(&placement.album_dir);
    fs::create_dir_all(&album_dir).map_err(|e| Error::filesystem(&album_dir, e))?;

    let destination = root.join(&placement.destination);
    fs::rename(source, &destination).map_err(|e| Error::filesystem(&destination, e))
}

pub fn run_reorder(config: &BatchConfig) -> Result<BatchReport> {
    info!("Organising by album artist");

    let files = scan_music_files(&config.root, REORDER_EXTENSIONS)?;
    let mut report = BatchReport::default();

    if files.is_empty() {
        info!("No music files found in {}", config.root.display());
        return Ok(report);
    }
    info!("Found {} music file(s) to organise", files.len());

    let mut entries = OnDiskEntries::new(&config.root);

    for path in files {
        let Some(name) = file_name_of(&path) else {
            warn!("Skipping non UTF-8 file name: {}", path.display());
            report.skipped += 1;
            continue;
        };

        let metadata = metadata_for(&path);
        let placement = plan(&metadata, name, &entries);

        if placement.collision {
            warn!(
                "{name} already exists in {}/{}; skipped",
                placement.artist_dir, placement.album_dir
            );
            report.skipped += 1;
            continue;
        }

        match move_into_place(&config.root, &path, &placement) {
            Ok(()) => {
                info!(
                    "Moved: {name} -> {}/{}/",
                    placement.artist_dir, placement.album_dir
                );
                entries.insert(placement.destination);
                report.processed += 1;
            }
            Err(e) => {
                error!("Failed to move {name}: {e}");
                report.failed += 1;
            }
        }
    }

    info!(
        "Reorder finished: {} moved, {} skipped, {} failed",
        report.processed, report.skipped, report.failed
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use id3::{Tag, TagLike, Version};

    fn tagged_mp3(dir: &Path, name: &str, album_artist: &str, album: &str) {
        let path = dir.join(name);
        fs::write(&path, b"audio").unwrap();
        let mut tag = Tag::new();
        tag.set_album_artist(album_artist);
        tag.set_album(album);
        tag.write_to_path(&path, Version::Id3v24).unwrap();
    }

    #[test]
    fn moves_files_under_artist_and_album() {
        let dir = tempfile::tempdir().unwrap();
        tagged_mp3(dir.path(), "01-a.mp3", "Band", "First LP");
        tagged_mp3(dir.path(), "02-b.mp3", "AC/DC", "Live?");

        let report = run_reorder(&BatchConfig::new(dir.path())).unwrap();
        assert_eq!(report.processed, 2);

        assert!(dir.path().join("Band/First LP/01-a.mp3").is_file());
        assert!(dir.path().join("AC_DC/Live_/02-b.mp3").is_file());
        assert!(!dir.path().join("01-a.mp3").exists());
    }

    #[test]
    fn untagged_and_unreadable_files_go_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bare.mp3"), b"no tag").unwrap();
        fs::write(dir.path().join("broken.flac"), b"no stream").unwrap();

        let report = run_reorder(&BatchConfig::new(dir.path())).unwrap();
        assert_eq!(report.processed, 2);

        let unknown = dir.path().join("Unknown Artist").join("Unknown Album");
        assert!(unknown.join("bare.mp3").is_file());
        assert!(unknown.join("broken.flac").is_file());
    }

    #[test]
    fn existing_destination_is_skipped_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Band").join("LP");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("song.mp3"), b"already here").unwrap();
        tagged_mp3(dir.path(), "song.mp3", "Band", "LP");

        let report = run_reorder(&BatchConfig::new(dir.path())).unwrap();
        assert_eq!(
            report,
            BatchReport {
                processed: 0,
                skipped: 1,
                failed: 0
            }
        );

        assert_eq!(fs::read(target.join("song.mp3")).unwrap(), b"already here");
        assert!(dir.path().join("song.mp3").is_file());
    }

    #[test]
    fn collision_set_grows_within_a_run() {
        let dir = tempfile::tempdir().unwrap();
        tagged_mp3(dir.path(), "x.mp3", "Band", "LP");

        let mut entries = OnDiskEntries::new(dir.path());
        let meta = metadata_for(&dir.path().join("x.mp3"));

        let first = plan(&meta, "x.mp3", &entries);
        move_into_place(dir.path(), &dir.path().join("x.mp3"), &first).unwrap();
        entries.insert(first.destination.clone());

        // a second source with the same name and metadata must not be moved
        let second = plan(&meta, "x.mp3", &entries);
        assert!(second.collision);
        assert!(dir.path().join("Band/LP/x.mp3").is_file());
    }

    #[test]
    fn running_twice_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        tagged_mp3(dir.path(), "t.mp3", "Band", "LP");

        run_reorder(&BatchConfig::new(dir.path())).unwrap();
        let second = run_reorder(&BatchConfig::new(dir.path())).unwrap();

        assert_eq!(second, BatchReport::default());
        assert!(dir.path().join("Band/LP/t.mp3").is_file());
    }
}
