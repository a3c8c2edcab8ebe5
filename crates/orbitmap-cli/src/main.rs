//! Universal orbit map command line.
//!
//! Thin wrapper over `orbitmap-logic`: collects orbit lines from arguments
//! or a file, then prints either the total orbit count or the number of
//! orbital transfers between two bodies.
//!
//! Usage:
//!   cargo run -p orbitmap-cli -- 'COM)B' 'B)C' 'C)D' 'D)YOU' 'C)SAN'
//!   cargo run -p orbitmap-cli -- --mode total --input puzzle.txt
//!   RUST_LOG=debug cargo run -p orbitmap-cli -- --json --input puzzle.txt

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {:?}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the answer.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
