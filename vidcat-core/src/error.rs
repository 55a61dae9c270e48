// ============================================================================
// vidcat-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for vidcat-core
//
// This module defines the error type used throughout the vidcat-core library.
// Every fallible operation returns `CoreResult<T>`, and the CLI surfaces these
// errors to the user with a non-zero exit status.
//
// KEY COMPONENTS:
// - CoreError: Enum of all error conditions in the library
// - CoreResult: Type alias for Result<T, CoreError>
// - Helper constructors for external command failures
//
// Per-file duration failures are NOT fatal and are recorded separately as
// `ResolutionFailure` values (see `catalog.rs`); only the variants below that
// escape the scanner abort a run.

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors that can occur while cataloguing a directory.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- File System Errors ----
    /// Generic I/O error (reading directories, writing outputs)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Path is invalid or could not be interpreted
    #[error("Path error: {0}")]
    PathError(String),

    // ---- External Tool Errors ----
    /// Required external command is not installed or not on PATH
    #[error(
        "Required external command '{0}' not found. Please ensure it is installed and in your PATH."
    )]
    DependencyNotFound(String),

    /// External command exists but could not be started
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, io::Error),

    /// External command ran but exited unsuccessfully
    #[error("Command '{0}' failed with status {1}. Stderr: {2}")]
    CommandFailed(String, ExitStatus, String),

    /// Output of an external command was not valid JSON
    #[error("Failed to parse JSON output: {0}")]
    JsonParseError(String),

    /// MediaInfo produced output that does not describe a usable file
    #[error("MediaInfo error: {0}")]
    MediaInfo(String),

    // ---- Rendering Errors ----
    /// The HTML template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// The HTML template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    // ---- Configuration Errors ----
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ---- General Errors ----
    /// Generic failure with context attached by a caller
    #[error("{0}")]
    OperationFailed(String),
}

/// Result type alias used throughout vidcat-core.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

// ============================================================================
// ERROR HELPERS
// ============================================================================

/// Builds the error for a command that could not be spawned.
///
/// A missing executable is reported as `DependencyNotFound` so callers can
/// tell "tool not installed" apart from other spawn failures.
pub fn command_start_error(cmd_name: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd_name.to_string())
    } else {
        CoreError::CommandStart(cmd_name.to_string(), err)
    }
}

/// Builds the error for a command that exited with a failure status.
pub fn command_failed_error(cmd_name: &str, status: ExitStatus, stderr: String) -> CoreError {
    CoreError::CommandFailed(cmd_name.to_string(), status, stderr.trim().to_string())
}

impl CoreError {
    /// Whether this error must abort the whole run rather than being
    /// recorded against a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CoreError::DependencyNotFound(_)
                | CoreError::CommandStart(..)
                | CoreError::Config(_)
        )
    }
}
