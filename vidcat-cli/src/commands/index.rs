//! Implementation of the indexing run.
//!
//! Resolves the scan root and output directory from the command line, builds
//! the core configuration and hands off to `vidcat_core::build_index`.

use crate::cli::Cli;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal::{format_elapsed, print_failures, print_status};

use vidcat_core::{
    CatalogConfig, CoreError, IndexSummary, MediaInfoProbe, build_index, format_hms,
};

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;

/// Resolves the directory to scan: the given path, or the current directory.
pub fn resolve_root(directory: Option<&Path>) -> CliResult<PathBuf> {
    let requested = match directory {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir().cli_context("Cannot determine current directory")?,
    };

    let root = requested.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {}",
            requested.display(),
            e
        ))
    })?;

    if !root.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input path '{}' is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Creates the output directory if needed and returns its path.
fn prepare_output_dir(output_dir: &Path) -> CliResult<PathBuf> {
    let parent = output_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = output_dir.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        CoreError::PathError(format!("Invalid output directory '{}'", output_dir.display()))
    })?;

    vidcat_core::ensure_directory(parent, name)
        .cli_with_context(|| format!("Cannot prepare output directory '{}'", output_dir.display()))
}

/// Builds the core configuration from parsed arguments.
pub fn build_config(args: &Cli) -> CliResult<CatalogConfig> {
    let root = resolve_root(args.directory.as_deref())?;
    let output_dir = match &args.output_dir {
        Some(dir) => prepare_output_dir(dir)?,
        None => root.clone(),
    };

    let mut config = CatalogConfig::new(root, output_dir);
    config.ignore_extension_case = args.ignore_case;
    Ok(config)
}

/// Runs a full indexing pass and prints the summary lines.
pub fn run_index(args: Cli) -> CliResult<IndexSummary> {
    let start = Instant::now();

    let config = build_config(&args)?;
    debug!("Scan root: {}", config.root_dir.display());
    debug!("Output directory: {}", config.output_dir.display());

    let summary = build_index(&config, &MediaInfoProbe::new())?;

    print_status(
        "Total duration",
        &format_hms(summary.totals.duration_secs),
        true,
    );
    print_status(
        "Video files",
        &format!("{} in {} group(s)", summary.totals.file_count, summary.group_count),
        false,
    );
    print_status("Index", &summary.index_path.display().to_string(), false);
    if let Some(log_path) = &summary.error_log_path {
        print_failures(summary.failures.len(), &log_path.display().to_string());
    }
    print_status("Execution time", &format_elapsed(start.elapsed()), false);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn output_dir_defaults_to_root() {
        let dir = tempdir().unwrap();
        let args = Cli::parse_from(["vidcat", dir.path().to_str().unwrap()]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.output_dir, config.root_dir);
        assert!(!config.ignore_extension_case);
    }

    #[test]
    fn output_dir_is_created() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("report");
        let args = Cli::parse_from([
            "vidcat",
            dir.path().to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
            "--ignore-case",
        ]);
        let config = build_config(&args).unwrap();
        assert!(out.is_dir());
        assert_eq!(config.output_dir, out);
        assert!(config.ignore_extension_case);
    }

    #[test]
    fn missing_root_is_path_error() {
        let result = resolve_root(Some(Path::new("surely_this_does_not_exist_42_cli")));
        assert!(matches!(result, Err(CoreError::PathError(_))));
    }

    #[test]
    fn file_root_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.mp4");
        std::fs::write(&file, b"").unwrap();
        assert!(matches!(resolve_root(Some(file.as_path())), Err(CoreError::PathError(_))));
    }

    #[test]
    fn output_dir_without_name_is_path_error() {
        assert!(matches!(prepare_output_dir(Path::new("..")), Err(CoreError::PathError(_))));
    }
}
