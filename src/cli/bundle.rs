//! Bundle command arguments

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle a directory:\n    bundleme bundle --path ./project\n\n\
                  Bundle without prompts:\n    bundleme bundle --path ./project -y\n\n\
                  Write the bundle elsewhere:\n    bundleme bundle --path ./project -o project.bundler")]
pub struct BundleArgs {
    /// Directory to bundle
    #[arg(long, short = 'p', value_name = "DIR")]
    pub path: PathBuf,
}
