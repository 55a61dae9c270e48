// vidcat-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.
// Every argument is optional: a bare `vidcat` catalogues the current
// working directory and writes the index into it.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vidcat: Video directory cataloguer",
    long_about = "Scans a directory tree for video files, reads their durations with \
                  MediaInfo and writes an HTML index grouped by top-level subdirectory."
)]
pub struct Cli {
    /// Directory to catalogue (defaults to the current working directory)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Directory where video_index.html and error.txt are written
    /// (defaults to DIRECTORY)
    #[arg(short = 'o', long = "output-dir", value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Match video extensions (mp4, avi, mpg) regardless of case
    #[arg(long, default_value_t = false)]
    pub ignore_case: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
