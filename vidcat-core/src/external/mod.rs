// ============================================================================
// vidcat-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the MediaInfo CLI
//
// This module encapsulates the only external collaborator of vidcat: the
// `mediainfo` command-line tool used to read video durations. It exposes the
// `DurationProbe` trait so the scanner can be driven by a scripted probe in
// tests, and a concrete implementation that shells out to mediainfo.
//
// KEY COMPONENTS:
// - DurationProbe: Trait for resolving a file's duration in whole seconds
// - MediaInfoProbe: Concrete implementation backed by `mediainfo --Output=JSON`

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// MediaInfo invocation and JSON parsing
pub mod mediainfo_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use mediainfo_executor::{MediaInfoProbe, MediaInfoResponse, get_media_info};

// ============================================================================
// DURATION PROBE
// ============================================================================

/// Resolves the playable duration of a media file.
///
/// Implementations return the duration of the file's first video track in
/// whole seconds, truncated toward zero. A file with no video track resolves
/// to `0`; this is not an error.
///
/// # Examples
///
/// ```rust
/// use vidcat_core::external::DurationProbe;
/// use vidcat_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedProbe(u64);
///
/// impl DurationProbe for FixedProbe {
///     fn duration_secs(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(self.0)
///     }
/// }
///
/// assert_eq!(FixedProbe(42).duration_secs(Path::new("a.mp4")).unwrap(), 42);
/// ```
pub trait DurationProbe {
    /// Returns the duration of the media file at `path` in whole seconds.
    fn duration_secs(&self, path: &Path) -> CoreResult<u64>;
}

impl<P: DurationProbe + ?Sized> DurationProbe for &P {
    fn duration_secs(&self, path: &Path) -> CoreResult<u64> {
        (**self).duration_secs(path)
    }
}
