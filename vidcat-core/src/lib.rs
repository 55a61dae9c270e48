//! Core library for cataloguing a directory tree of video files.
//!
//! This crate scans a directory for video files, reads each file's duration
//! through MediaInfo, groups the files by top-level subdirectory and renders a
//! static HTML index with per-group and total durations.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vidcat_core::{CatalogConfig, MediaInfoProbe, build_index, format_hms};
//! use std::path::PathBuf;
//!
//! let root = PathBuf::from("/path/to/videos");
//! let config = CatalogConfig::new(root.clone(), root);
//!
//! let summary = build_index(&config, &MediaInfoProbe::new()).unwrap();
//! println!("Total duration: {}", format_hms(summary.totals.duration_secs));
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod format;
pub mod pipeline;
pub mod report;
pub mod writer;

// Re-exports for public API
pub use catalog::{
    CatalogGroup, CatalogTotals, GroupedCatalog, ResolutionFailure, ScanOutcome, VideoFile,
};
pub use config::CatalogConfig;
pub use discovery::scan_directory;
pub use error::{CoreError, CoreResult};
pub use external::{DurationProbe, MediaInfoProbe};
pub use format::format_hms;
pub use pipeline::{IndexSummary, build_index};
pub use report::{ReportRenderer, render_index, root_link};
pub use writer::{WriteMode, ensure_directory, write_error_log, write_index, write_to_file};
