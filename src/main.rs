//! CLI entry point for the multi-monitor wallpaper generator

use clap::Parser;
use mosaicwall::io::cli::{Cli, Runner};
use mosaicwall::io::logging;
use std::process::ExitCode;

// Allow print for the final error message
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut runner = Runner::new(cli);
    match runner.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
