//! Version command implementation
//!
//! Besides the package version this reports the limits that shape every
//! bundle, so two bundles can be compared knowing which build made them.

use crate::artifact::DEFAULT_ARTIFACT;
use crate::capture::{MAX_LINES, READ_CHUNK_LIMIT};
use crate::classify::BINARY_EXTENSIONS;
use crate::error::Result;
use crate::stats::MAX_LABELS;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "bundleme {version}\n\n\
         Build info:\n  \
         Minimum Rust version: {msrv}\n  \
         Profile: {profile}\n\n\
         Bundle format:\n  \
         Default output: {DEFAULT_ARTIFACT}\n  \
         Lines per file: {MAX_LINES} (chunks of up to {READ_CHUNK_LIMIT} bytes)\n  \
         File types tracked: {MAX_LABELS}\n  \
         Binary extensions: {binaries}\n",
        version = env!("CARGO_PKG_VERSION"),
        msrv = env!("CARGO_PKG_RUST_VERSION"),
        binaries = BINARY_EXTENSIONS.join(" "),
    )
}
