//! Hopdir CLI Binary
//!
//! Prints shell code on stdout for the calling shell to evaluate.

use clap::Parser;
use hopdir::logging::init_logging;
use hopdir::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = context
        .config()
        .logging
        .clone()
        .with_overrides(&cli.logging_overrides());
    if let Err(e) = init_logging(Some(&logging), cli.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
