//! BundleMe - project bundler
//!
//! Walks a project directory, classifies files by extension and writes a
//! single text bundle with file-type statistics, project metadata and the
//! concatenated contents of every file.

use clap::Parser;
use std::path::PathBuf;

mod artifact;
mod assemble;
mod capture;
mod classify;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod metadata;
mod prompt;
mod staging;
mod stats;
mod ui;
mod walker;

use cli::{Cli, Commands};
use commands::bundle::{BundleRequest, stdin_is_interactive};

/// Build the bundle request for the default mode or `bundle --path`
fn bundle_request(cli: &Cli, root: PathBuf) -> BundleRequest {
    BundleRequest {
        root,
        output: cli.output.clone(),
        values: cli.metadata_values(),
        interactive: !cli.no_input && stdin_is_interactive(),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match &cli.command {
        None => commands::bundle::run(&bundle_request(&cli, PathBuf::from("."))),
        Some(Commands::Bundle(args)) => {
            commands::bundle::run(&bundle_request(&cli, args.path.clone()))
        }
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args.clone()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
