// vidcat-cli/src/main.rs
//
// Entry point for the `vidcat` executable.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up console logging.
// - Running the indexing pass via `vidcat_core::build_index`.
// - Mapping fatal errors to a non-zero exit status.

use clap::Parser;
use std::process;
use vidcat_cli::terminal::print_error;
use vidcat_cli::{Cli, logging, run_index};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_index(cli) {
        log::debug!("Run failed: {:?}", e);
        print_error(&e.to_string());
        process::exit(1);
    }
}
