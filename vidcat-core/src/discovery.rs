//! Directory scanning and grouping of video files.
//!
//! A scan runs in two phases:
//!
//! 1. **Root pass**: the video files sitting directly in the scan root form one
//!    group keyed by the root path.
//! 2. **Subdirectory pass**: every immediate subdirectory, in name order, is
//!    walked to full depth and all video files beneath it form one group keyed
//!    by that subdirectory's name, however deeply they are nested.
//!
//! Each video file found is resolved through a [`DurationProbe`]. Files whose
//! duration cannot be resolved, including dangling symlinks, are recorded as
//! [`ResolutionFailure`]s and the scan carries on. Directories inside the
//! subdirectory pass that cannot be read are skipped with a warning. Failing to
//! list the root and fatal probe errors (such as a missing `mediainfo` binary)
//! abort the scan.

use crate::catalog::{ResolutionFailure, ScanOutcome, VideoFile, relative_to};
use crate::config::CatalogConfig;
use crate::error::CoreResult;
use crate::external::DurationProbe;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate contents of one directory, both lists sorted by name.
#[derive(Debug, Default)]
struct DirListing {
    files: Vec<OsString>,
    subdirs: Vec<OsString>,
}

/// Lists the immediate files and subdirectories of `dir` without descending.
///
/// Symlinks are classified by their target. A symlink whose target is missing
/// is listed as a file so it reaches the failure log instead of vanishing.
fn list_dir(dir: &Path) -> CoreResult<DirListing> {
    let mut listing = DirListing::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            listing.subdirs.push(entry.file_name());
        } else if path.is_file() || entry.file_type()?.is_symlink() {
            listing.files.push(entry.file_name());
        }
    }

    listing.files.sort();
    listing.subdirs.sort();
    Ok(listing)
}

/// Scans `config.root_dir` and returns the grouped catalog, totals and failures.
///
/// # Examples
///
/// ```rust,no_run
/// use vidcat_core::{CatalogConfig, MediaInfoProbe, scan_directory};
/// use std::path::PathBuf;
///
/// let config = CatalogConfig::new(PathBuf::from("/videos"), PathBuf::from("/videos"));
/// let outcome = scan_directory(&config, &MediaInfoProbe::new()).unwrap();
/// println!("{} files in {} groups", outcome.totals.file_count, outcome.catalog.len());
/// ```
pub fn scan_directory<P: DurationProbe + ?Sized>(
    config: &CatalogConfig,
    probe: &P,
) -> CoreResult<ScanOutcome> {
    let root = config.root_dir.as_path();
    let mut scan = Scan {
        config,
        probe,
        outcome: ScanOutcome::default(),
    };

    let listing = list_dir(root)?;
    log::debug!(
        "Root {} has {} files and {} subdirectories",
        root.display(),
        listing.files.len(),
        listing.subdirs.len()
    );

    scan.root_pass(&listing.files)?;
    scan.subdirectory_pass(&listing.subdirs)?;

    Ok(scan.outcome)
}

struct Scan<'a, P: ?Sized> {
    config: &'a CatalogConfig,
    probe: &'a P,
    outcome: ScanOutcome,
}

impl<P: DurationProbe + ?Sized> Scan<'_, P> {
    /// Groups the video files directly inside the root under the root path.
    fn root_pass(&mut self, files: &[OsString]) -> CoreResult<()> {
        let root = self.config.root_dir.clone();
        let key = root.display().to_string();
        let entries = self.collect_files(&root, files, &key)?;
        self.outcome.catalog.insert(key, entries);
        Ok(())
    }

    /// Groups everything beneath each immediate subdirectory under its name.
    ///
    /// A directory in the subtree that cannot be read is skipped along with
    /// everything below it.
    fn subdirectory_pass(&mut self, subdirs: &[OsString]) -> CoreResult<()> {
        for name in subdirs {
            let key = name.to_string_lossy().into_owned();
            let top = self.config.root_dir.join(name);
            let mut entries = Vec::new();

            // Top-down, sorted: a directory is yielded before its children.
            for dir_entry in WalkDir::new(&top).sort_by_file_name() {
                let dir_entry = match dir_entry {
                    Ok(dir_entry) => dir_entry,
                    Err(e) => {
                        log::warn!("Skipping unreadable directory: {}", e);
                        continue;
                    }
                };
                if !dir_entry.file_type().is_dir() {
                    continue;
                }

                let dir = dir_entry.into_path();
                log::debug!("Visiting {}", dir.display());
                let listing = match list_dir(&dir) {
                    Ok(listing) => listing,
                    Err(e) => {
                        log::warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                        continue;
                    }
                };
                entries.extend(self.collect_files(&dir, &listing.files, &key)?);
            }

            self.outcome.catalog.insert(key, entries);
        }
        Ok(())
    }

    /// Resolves every video file among `files` (already sorted) in `dir`.
    fn collect_files(
        &mut self,
        dir: &Path,
        files: &[OsString],
        key: &str,
    ) -> CoreResult<Vec<VideoFile>> {
        let mut entries = Vec::new();

        for name in files {
            if !self.config.is_video_file(Path::new(name)) {
                continue;
            }

            let path = dir.join(name);
            if let Err(e) = fs::metadata(&path) {
                self.record_failure(path, format!("Cannot access file: {}", e));
                continue;
            }

            match VideoFile::resolve(
                dir,
                name,
                &self.config.root_dir,
                self.probe,
                &mut self.outcome.totals,
            ) {
                Ok(entry) => {
                    log::info!("{} [{}]", entry.name, dir.display());
                    entries.push(entry);
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => self.record_failure(path, e.to_string()),
            }
        }

        log::debug!(
            "{} video files collected for [{}] from {}",
            entries.len(),
            key,
            dir.display()
        );
        Ok(entries)
    }

    fn record_failure(&mut self, path: PathBuf, reason: String) {
        log::warn!("Could not resolve duration of {}: {}", path.display(), reason);
        self.outcome.failures.push(ResolutionFailure {
            relative_path: relative_to(&path, &self.config.root_dir),
            path,
            reason,
        });
    }
}
