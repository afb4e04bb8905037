//! core/mod.rs
//!
//! The brain of the app:
//! - Reconciliation rules (pure): field extraction, track resolution, cover
//!   policy, name sanitizing, placement planning
//! - Codec adapter (`tags`): id3 / lofty <-> [`types::TagContainer`]
//! - Batch pipelines (`rename`, `reorder`): discovery, I/O, logging
//!
//! The rules never touch the filesystem or log; the pipelines feed them
//! explicit inputs and act on what they return.

pub mod config;
pub mod cover;
pub mod error;
pub mod extract;
pub mod library;
pub mod placement;
pub mod rename;
pub mod reorder;
pub mod sanitize;
pub mod tags;
pub mod track;
pub mod types;

pub use config::BatchConfig;
pub use rename::{RenameRequest, run_rename};
pub use reorder::run_reorder;
