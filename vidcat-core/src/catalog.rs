// ============================================================================
// vidcat-core/src/catalog.rs
// ============================================================================
//
// CATALOG: Value Types Produced by a Directory Scan
//
// This module defines the data model shared by the scanner, the renderer and
// the output writer.
//
// KEY COMPONENTS:
// - VideoFile: One discovered video file with its resolved duration
// - CatalogTotals: Running count and summed duration, threaded through a scan
// - GroupedCatalog: Ordered mapping from directory key to its video files
// - ResolutionFailure: A file whose duration could not be determined
// - ScanOutcome: Everything a scan returns

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::external::DurationProbe;
use crate::format::format_hms;

// ---- Standard library imports ----
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

// ============================================================================
// CATALOG ENTRY
// ============================================================================

/// One discovered video file.
///
/// Entries are only ever created through [`VideoFile::resolve`], which asks
/// the probe for the duration and records the file in the run's totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    /// File name including extension, lossily converted for display
    pub name: String,
    /// Full path of the file as found on disk
    pub path: PathBuf,
    /// Directory the file was found in
    pub directory: PathBuf,
    /// Path of the file relative to the scan root
    pub relative_path: PathBuf,
    /// Duration of the first video track in whole seconds
    pub duration_secs: u64,
}

impl VideoFile {
    /// Resolves the duration of `directory/name` and builds the entry.
    ///
    /// On success the entry is counted in `totals`. On failure `totals` is
    /// left untouched and the probe's error is returned.
    pub fn resolve<P: DurationProbe + ?Sized>(
        directory: &Path,
        file_name: &OsStr,
        scan_root: &Path,
        probe: &P,
        totals: &mut CatalogTotals,
    ) -> CoreResult<Self> {
        let path = directory.join(file_name);
        let duration_secs = probe.duration_secs(&path)?;

        let entry = Self {
            name: file_name.to_string_lossy().into_owned(),
            relative_path: relative_to(&path, scan_root),
            path,
            directory: directory.to_path_buf(),
            duration_secs,
        };
        totals.record(&entry);
        Ok(entry)
    }
}

impl fmt::Display for VideoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File \"{}\" - Duration: {}",
            self.name,
            format_hms(self.duration_secs)
        )
    }
}

/// `path` relative to `root`, or `path` unchanged when it is not under `root`.
pub(crate) fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

// ============================================================================
// TOTALS
// ============================================================================

/// Running totals for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogTotals {
    pub file_count: usize,
    pub duration_secs: u64,
}

impl CatalogTotals {
    fn record(&mut self, entry: &VideoFile) {
        self.file_count += 1;
        self.duration_secs += entry.duration_secs;
    }
}

// ============================================================================
// GROUPED CATALOG
// ============================================================================

/// Video files sharing one directory key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    /// Root path for root-level files, or the immediate subdirectory's name
    pub key: String,
    pub files: Vec<VideoFile>,
}

impl CatalogGroup {
    pub fn duration_secs(&self) -> u64 {
        self.files.iter().map(|file| file.duration_secs).sum()
    }
}

/// Ordered mapping from directory key to the files found under it.
///
/// Keys keep insertion order, which the scanner makes "root first, then
/// immediate subdirectories by name". Empty groups are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedCatalog {
    groups: Vec<CatalogGroup>,
}

impl GroupedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `files` under `key`, extending the group if it already exists.
    pub fn insert(&mut self, key: impl Into<String>, files: Vec<VideoFile>) {
        if files.is_empty() {
            return;
        }

        let key = key.into();
        match self.groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.files.extend(files),
            None => self.groups.push(CatalogGroup { key, files }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[VideoFile]> {
        self.groups
            .iter()
            .find(|group| group.key == key)
            .map(|group| group.files.as_slice())
    }

    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }

    pub fn files(&self) -> impl Iterator<Item = &VideoFile> {
        self.groups.iter().flat_map(|group| group.files.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// ============================================================================
// FAILURES
// ============================================================================

/// A recognized video file whose duration could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionFailure {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub reason: String,
}

impl fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File \"{}\" - Error: {}",
            self.relative_path.display(),
            self.reason
        )
    }
}

// ============================================================================
// SCAN OUTCOME
// ============================================================================

/// Result of scanning one directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub catalog: GroupedCatalog,
    pub totals: CatalogTotals,
    pub failures: Vec<ResolutionFailure>,
}
