//! Terminal output for the end of a run.
//!
//! Lines go through `log::info!` so they share the console logger with the
//! per-file progress lines emitted by vidcat-core.

use log::{info, warn};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Check if color should be used (respects NO_COLOR environment variable)
pub fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a labelled status line, optionally highlighting the value.
pub fn print_status(label: &str, value: &str, highlight: bool) {
    if highlight && should_use_color() {
        info!("{}: {}", label, value.bold().green());
    } else {
        info!("{}: {}", label, value);
    }
}

/// Print the warning shown when some files could not be catalogued.
pub fn print_failures(count: usize, log_path: &str) {
    if should_use_color() {
        warn!(
            "{} file(s) could not be read; details in {}",
            count.yellow().bold(),
            log_path
        );
    } else {
        warn!("{} file(s) could not be read; details in {}", count, log_path);
    }
}

/// Print a fatal error to stderr.
pub fn print_error(message: &str) {
    if should_use_color() {
        eprintln!("{} {}", "Error:".bright_red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

/// Formats wall-clock time as seconds with two decimals (e.g. "1.25 s").
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} s", elapsed.as_secs_f64())
}
