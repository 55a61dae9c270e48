// ============================================================================
// vidcat-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines the configuration used by the scanner, renderer and
// output writer. Instances are created by consumers of the library (like
// vidcat-cli) and passed to `build_index` or `scan_directory`.
//
// KEY COMPONENTS:
// - CatalogConfig: Main configuration structure for the library
// - Default constants: recognized extensions and output file names

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// File extensions treated as video files when no override is given.
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mpg"];

/// Name of the generated HTML index.
pub const DEFAULT_INDEX_FILE_NAME: &str = "video_index.html";

/// Name of the error log written when some durations could not be resolved.
pub const DEFAULT_ERROR_LOG_FILE_NAME: &str = "error.txt";

// ============================================================================
// CATALOG CONFIGURATION
// ============================================================================

/// Main configuration structure for the vidcat-core library.
///
/// # Examples
///
/// ```rust,no_run
/// use vidcat_core::CatalogConfig;
/// use std::path::PathBuf;
///
/// let mut config = CatalogConfig::new(PathBuf::from("/videos"), PathBuf::from("/videos"));
/// config.ignore_extension_case = true;
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    // ---- Path Configuration ----

    /// Directory whose tree is scanned
    pub root_dir: PathBuf,

    /// Directory receiving the HTML index and the error log
    pub output_dir: PathBuf,

    // ---- Matching ----

    /// Extensions (without the dot) recognized as video files
    pub video_extensions: Vec<String>,

    /// Match extensions without regard to ASCII case
    pub ignore_extension_case: bool,

    // ---- Output Names ----

    pub index_file_name: String,

    pub error_log_file_name: String,
}

impl CatalogConfig {
    /// Creates a configuration with default extensions and file names.
    pub fn new(root_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            root_dir,
            output_dir,
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            ignore_extension_case: false,
            index_file_name: DEFAULT_INDEX_FILE_NAME.to_string(),
            error_log_file_name: DEFAULT_ERROR_LOG_FILE_NAME.to_string(),
        }
    }

    /// Validates the configuration before a run.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the root is an existing directory and at least one
    ///   extension is configured
    /// * `Err(CoreError::Config)` - Otherwise
    pub fn validate(&self) -> CoreResult<()> {
        if !self.root_dir.is_dir() {
            return Err(CoreError::Config(format!(
                "Scan root '{}' is not a directory",
                self.root_dir.display()
            )));
        }

        if self.video_extensions.is_empty() {
            return Err(CoreError::Config(
                "At least one video extension must be configured".to_string(),
            ));
        }

        if let Some(ext) = self
            .video_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(CoreError::Config(format!(
                "Invalid video extension '{ext}': expected a bare extension such as 'mp4'"
            )));
        }

        Ok(())
    }

    /// Checks whether `path` carries one of the configured video extensions.
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };

        self.video_extensions.iter().any(|known| {
            if self.ignore_extension_case {
                known.eq_ignore_ascii_case(ext)
            } else {
                known == ext
            }
        })
    }

    /// Display name of the scanned directory: its last path component, or
    /// the full path when it has none (e.g. `/`).
    #[must_use]
    pub fn directory_display_name(&self) -> String {
        self.root_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root_dir.display().to_string())
    }
}
