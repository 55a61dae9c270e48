//! End-to-end indexing run: scan, render, write.

use crate::catalog::{CatalogTotals, ResolutionFailure};
use crate::config::CatalogConfig;
use crate::discovery::scan_directory;
use crate::error::CoreResult;
use crate::external::DurationProbe;
use crate::report::{ReportRenderer, root_link};
use crate::writer::{write_error_log, write_index};

use chrono::Local;
use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct IndexSummary {
    pub totals: CatalogTotals,
    pub group_count: usize,
    pub failures: Vec<ResolutionFailure>,
    pub index_path: PathBuf,
    /// Set only when at least one duration could not be resolved
    pub error_log_path: Option<PathBuf>,
}

/// Scans `config.root_dir`, renders the index and writes the outputs.
///
/// The index is written on every successful scan, including an empty one.
/// Resolution failures do not fail the run; they end up in the error log.
pub fn build_index<P: DurationProbe + ?Sized>(
    config: &CatalogConfig,
    probe: &P,
) -> CoreResult<IndexSummary> {
    config.validate()?;

    let outcome = scan_directory(config, probe)?;
    log::debug!(
        "Scan finished: {} files in {} groups, {} failures",
        outcome.totals.file_count,
        outcome.catalog.len(),
        outcome.failures.len()
    );

    // Links in the index are relative to where it is written.
    let link_base = root_link(&config.root_dir, &config.output_dir)?;
    log::debug!("Linking files through {}", link_base.display());

    let renderer = ReportRenderer::new()?;
    let html = renderer.render(
        &outcome.catalog,
        &outcome.totals,
        &config.directory_display_name(),
        &link_base,
    )?;

    let index_path = write_index(&config.output_dir, &config.index_file_name, &html)?;
    let error_log_path = write_error_log(
        &config.output_dir,
        &config.error_log_file_name,
        &outcome.failures,
        Local::now(),
    )?;

    Ok(IndexSummary {
        totals: outcome.totals,
        group_count: outcome.catalog.len(),
        failures: outcome.failures,
        index_path,
        error_log_path,
    })
}
