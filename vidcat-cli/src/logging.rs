// ============================================================================
// vidcat-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Console Logger Setup
//
// The CLI logs through the standard `log` facade with `env_logger` as the
// backend. Info records are the tool's human-facing output (one line per
// catalogued file, the summary lines) and are printed without decoration;
// every other level carries a coloured level tag.
//
// USAGE:
// - default: Info
// - --verbose: Debug
// - RUST_LOG=...: overrides both, e.g. RUST_LOG=vidcat_core=trace

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::terminal::should_use_color;

/// Initialize the console logger.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    init_with_level(level);
}

/// Initialize the console logger with a specific default level.
///
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_with_level(level: LevelFilter) {
    let color = should_use_color();

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if record.level() == Level::Info {
                return writeln!(buf, "{}", record.args());
            }

            let tag = level_tag(record.level());
            let tag = if !color {
                tag.to_string()
            } else {
                match record.level() {
                    Level::Error => tag.bright_red().to_string(),
                    Level::Warn => tag.yellow().to_string(),
                    Level::Debug => tag.blue().to_string(),
                    _ => tag.magenta().to_string(),
                }
            };
            writeln!(buf, "{} {}", tag, record.args())
        })
        .init();

    log::debug!("Logger initialized with level: {}", level);
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[ERROR]",
        Level::Warn => "[WARN]",
        Level::Info => "[INFO]",
        Level::Debug => "[DEBUG]",
        Level::Trace => "[TRACE]",
    }
}
