//! Output writing: the HTML index, the error log and output directories.
//!
//! Writes are plain, non-atomic file writes. A crash mid-write can leave a
//! partial or stale file behind.

use crate::catalog::ResolutionFailure;
use crate::error::CoreResult;

use chrono::{DateTime, Local, SecondsFormat};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How [`write_to_file`] opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file, truncating any previous content
    Overwrite,
    /// Create the file if needed and append to it
    Append,
}

/// Writes `content` to `dir/filename` and returns the full path.
pub fn write_to_file(
    dir: &Path,
    filename: &str,
    content: &str,
    mode: WriteMode,
) -> CoreResult<PathBuf> {
    let full_path = dir.join(filename);
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => options.write(true).create(true).truncate(true),
        WriteMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(&full_path)?;
    file.write_all(content.as_bytes())?;
    Ok(full_path)
}

/// Creates `path/name`. An already existing directory is not an error.
pub fn ensure_directory(path: &Path, name: &str) -> CoreResult<PathBuf> {
    let directory_path = path.join(name);
    match fs::create_dir(&directory_path) {
        Ok(()) => log::debug!("Created directory {}", directory_path.display()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && directory_path.is_dir() => {
            log::debug!(
                "Directory {} already exists, continuing",
                directory_path.display()
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(directory_path)
}

/// Writes (or overwrites) the HTML index.
pub fn write_index(dir: &Path, filename: &str, html: &str) -> CoreResult<PathBuf> {
    let path = write_to_file(dir, filename, html, WriteMode::Overwrite)?;
    log::debug!("Wrote index {} ({} bytes)", path.display(), html.len());
    Ok(path)
}

/// Writes the error log if there is anything to report.
///
/// The first line is `timestamp` in ISO-8601 with local offset; each failure
/// follows on its own line. Returns `None` and leaves any existing log alone
/// when `failures` is empty.
pub fn write_error_log(
    dir: &Path,
    filename: &str,
    failures: &[ResolutionFailure],
    timestamp: DateTime<Local>,
) -> CoreResult<Option<PathBuf>> {
    if failures.is_empty() {
        return Ok(None);
    }

    let header = format!("{}\n", timestamp.to_rfc3339_opts(SecondsFormat::Micros, false));
    let path = write_to_file(dir, filename, &header, WriteMode::Overwrite)?;
    for failure in failures {
        write_to_file(dir, filename, &format!("{failure}\n"), WriteMode::Append)?;
    }

    log::debug!("Wrote {} failures to {}", failures.len(), path.display());
    Ok(Some(path))
}
