//! Duration formatting helpers.
//!
//! Durations are tracked as whole seconds everywhere in vidcat; this module
//! turns them into the `HH:MM:SS` form shown on the console and in the index.

/// Formats whole seconds as HH:MM:SS (e.g., 3725 -> "01:02:05").
///
/// Hours are zero-padded to two digits but are not capped, so 100 hours
/// renders as "100:00:00".
#[must_use]
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
