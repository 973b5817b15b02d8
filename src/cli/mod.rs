//! CLI definitions using clap derive API
//!
//! Running without a subcommand bundles the current directory; every global
//! option applies to that default mode as well.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;

use crate::artifact::DEFAULT_ARTIFACT;
use crate::metadata::MetadataValues;

/// BundleMe - project bundler
///
/// Walk a project directory and write a single annotated text bundle.
#[derive(Parser, Debug)]
#[command(
    name = "bundleme",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle a project directory into a single annotated text file",
    long_about = "BundleMe walks a project directory, classifies every file by extension and \
                  writes one text bundle with file-type statistics, project metadata and the \
                  contents of every file.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundleme                                \x1b[90m# Bundle the current directory\x1b[0m\n   \
                  bundleme bundle --path ./project        \x1b[90m# Bundle another directory\x1b[0m\n   \
                  bundleme -y --name demo --author Jane   \x1b[90m# Run without prompts\x1b[0m\n   \
                  bundleme -o out.bundler bundle -p src   \x1b[90m# Choose the output file\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Output file for the bundle
    #[arg(long, short = 'o', global = true, env = "BUNDLEME_OUTPUT", default_value = DEFAULT_ARTIFACT)]
    pub output: PathBuf,

    /// Package name written to BUNDLE-NAME
    #[arg(long, global = true, env = "BUNDLEME_NAME")]
    pub name: Option<String>,

    /// Description written to BUNDLE-DESCRIPTION
    #[arg(long, global = true, env = "BUNDLEME_DESCRIPTION")]
    pub description: Option<String>,

    /// License file reference
    #[arg(long, global = true, env = "BUNDLEME_LICENSE")]
    pub license: Option<String>,

    /// Project author
    #[arg(long, global = true, env = "BUNDLEME_AUTHOR")]
    pub author: Option<String>,

    /// Never prompt; missing metadata becomes UNKNOWN
    #[arg(long = "no-input", short = 'y', global = true)]
    pub no_input: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Metadata given on the command line or through the environment
    pub fn metadata_values(&self) -> MetadataValues {
        MetadataValues {
            package_name: self.name.clone(),
            description: self.description.clone(),
            license_ref: self.license.clone(),
            author: self.author.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle a specific directory
    Bundle(BundleArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
