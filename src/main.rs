//! retag
//!
//! # What this program is
//! A small command-line tool that makes a folder of audio files agree on their
//! album metadata, then optionally files them away by album artist and album.
//!
//! # Commands
//! - `rename --album <A> --artist <B>`: retag every file in the folder with the
//!   album title and album artist, a track number (existing tag, `NN-` file
//!   name prefix, or position), a title taken from the file name, and the
//!   folder's `Pochette.jpg` as the only embedded picture (no cover file =
//!   pictures are stripped).
//! - `reorder`: move every file to `<album artist>/<album>/<file>` based on its
//!   own tags. Files that would overwrite something are skipped.
//!
//! # Exit status
//! - 0 when the batch ran, even if some files were skipped or failed
//! - 1 when the folder itself could not be read
//! - 2 on usage errors (missing `--album` / `--artist`, unknown command)

mod core;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::{BatchConfig, RenameRequest};
use crate::core::config::DEFAULT_COVER_FILE;

#[derive(Parser)]
#[command(name = "retag")]
#[command(about = "Normalize album tags and file audio by album artist")]
struct Cli {
    /// Folder holding the audio files
    #[arg(long, global = true, env = "RETAG_DIR", default_value = ".")]
    dir: PathBuf,

    /// Cover image file name, looked up inside the folder
    #[arg(long, global = true, env = "RETAG_COVER", default_value = DEFAULT_COVER_FILE)]
    cover: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite album, album artist, track number, title and cover tags
    Rename {
        /// Album title
        #[arg(long)]
        album: String,
        /// Album artist
        #[arg(long)]
        artist: String,
    },
    /// Move files into <album artist>/<album>/ folders
    Reorder,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "retag=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = BatchConfig::new(cli.dir).with_cover_file(cli.cover);

    let result = match cli.command {
        Commands::Rename { album, artist } => core::run_rename(
            &config,
            &RenameRequest {
                album,
                album_artist: artist,
            },
        ),
        Commands::Reorder => core::run_reorder(&config),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rename_requires_album_and_artist() {
        assert!(Cli::try_parse_from(["retag", "rename", "--album", "Demo"]).is_err());
        assert!(Cli::try_parse_from(["retag", "rename", "--artist", "Band X"]).is_err());

        let args = ["retag", "rename", "--album", "Demo", "--artist", "Band X"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Rename { album, artist } => {
                assert_eq!(album, "Demo");
                assert_eq!(artist, "Band X");
            }
            Commands::Reorder => panic!("expected rename"),
        }
    }

    #[test]
    fn missing_command_is_an_error() {
        assert!(Cli::try_parse_from(["retag"]).is_err());
    }

    #[test]
    fn global_options_after_subcommand() {
        let args = ["retag", "reorder", "--dir", "/music", "--cover", "front.jpg"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.dir, PathBuf::from("/music"));
        assert_eq!(cli.cover, "front.jpg");
        assert!(matches!(cli.command, Commands::Reorder));
    }
}
