//! Error plumbing for the CLI.
//!
//! The CLI reports `CoreError`s directly. Failures that happen before the core
//! takes over (locating the working directory, preparing `--output-dir`) get a
//! short prefix naming the step that failed.

use vidcat_core::{CoreError, CoreResult};

use std::fmt::Display;

pub type CliResult<T> = CoreResult<T>;

/// Prefixes the error of a failed setup step with what was being attempted.
pub trait CliErrorContext<T> {
    fn cli_context(self, step: impl Display) -> CliResult<T>;

    /// Like [`cli_context`](CliErrorContext::cli_context), building the
    /// message only on failure.
    fn cli_with_context<D: Display>(self, step: impl FnOnce() -> D) -> CliResult<T>;
}

impl<T, E: Into<CoreError>> CliErrorContext<T> for Result<T, E> {
    fn cli_context(self, step: impl Display) -> CliResult<T> {
        self.cli_with_context(|| step)
    }

    fn cli_with_context<D: Display>(self, step: impl FnOnce() -> D) -> CliResult<T> {
        self.map_err(|e| {
            let cause: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", step(), cause))
        })
    }
}
