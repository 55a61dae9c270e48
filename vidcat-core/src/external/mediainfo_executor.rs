//! MediaInfo integration for reading video durations
//!
//! This module runs `mediainfo --Output=JSON` against a file, deserializes the
//! track list and extracts the duration of the first video track.

use super::DurationProbe;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Command;

const MEDIAINFO: &str = "mediainfo";

/// MediaInfo track. Only the fields vidcat reads are modelled; the rest of
/// the JSON object is ignored.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type")]
    pub track_type: String,
    /// Duration in seconds, as a decimal string (e.g. "10.010")
    #[serde(rename = "Duration")]
    pub duration: Option<String>,
    #[serde(rename = "Format")]
    pub format: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaInfoMedia {
    #[serde(default)]
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure. `media` is null when mediainfo could
/// not open or recognize the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaInfoResponse {
    pub media: Option<MediaInfoMedia>,
}

impl MediaInfoResponse {
    /// Parses the JSON printed by `mediainfo --Output=JSON`.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::JsonParseError(e.to_string()))
    }

    /// Duration of the first video track in whole seconds.
    ///
    /// Returns `Ok(0)` when the file has no video track.
    pub fn video_duration_secs(&self) -> CoreResult<u64> {
        let media = self.media.as_ref().ok_or_else(|| {
            CoreError::MediaInfo("file could not be opened or recognized".to_string())
        })?;

        let Some(video_track) = media.track.iter().find(|track| track.track_type == "Video")
        else {
            log::debug!("No video track found in MediaInfo data, using 0");
            return Ok(0);
        };

        let raw = video_track.duration.as_deref().ok_or_else(|| {
            CoreError::MediaInfo("video track has no duration".to_string())
        })?;

        parse_duration_secs(raw)
    }
}

/// Truncates a MediaInfo duration string to whole seconds.
fn parse_duration_secs(raw: &str) -> CoreResult<u64> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        CoreError::MediaInfo(format!("unparseable video track duration '{raw}'"))
    })?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(CoreError::MediaInfo(format!(
            "invalid video track duration '{raw}'"
        )));
    }

    Ok(secs.trunc() as u64)
}

/// Gets media information for a file using MediaInfo.
pub fn get_media_info(input_path: &Path) -> CoreResult<MediaInfoResponse> {
    log::debug!("Running mediainfo on: {}", input_path.display());

    let output = Command::new(MEDIAINFO)
        .arg("--Output=JSON")
        .arg(input_path)
        .output()
        .map_err(|e| command_start_error(MEDIAINFO, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_failed_error(MEDIAINFO, output.status, stderr.to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout.trim().is_empty() {
        return Err(CoreError::MediaInfo(format!(
            "no output for {}",
            input_path.display()
        )));
    }

    MediaInfoResponse::from_json(&stdout).map_err(|e| {
        CoreError::JsonParseError(format!(
            "Failed to parse mediainfo JSON output for {}: {}",
            input_path.display(),
            e
        ))
    })
}

/// `DurationProbe` backed by the `mediainfo` executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaInfoProbe;

impl MediaInfoProbe {
    pub fn new() -> Self {
        Self
    }
}

impl DurationProbe for MediaInfoProbe {
    fn duration_secs(&self, path: &Path) -> CoreResult<u64> {
        get_media_info(path)?.video_duration_secs()
    }
}
