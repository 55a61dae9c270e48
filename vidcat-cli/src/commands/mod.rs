//! Command implementations for the CLI.

/// Module containing the implementation of the indexing run.
/// Scans a directory and writes the HTML index.
pub mod index;
