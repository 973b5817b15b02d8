//! Bundle command implementation
//!
//! The bundling process:
//! 1. Resolve metadata (flags, bundleme.yaml, prompts, UNKNOWN)
//! 2. Walk the tree, staging one block per file
//! 3. Assemble the bundle from the statistics and the staged blocks
//! 4. Move the finished artifact into place

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use console::Style;
use tracing::{debug, info};

use crate::artifact::write_atomically;
use crate::assemble::assemble;
use crate::config::BundleConfig;
use crate::error::{Result, staging_failed};
use crate::metadata::{BundleMetadata, MetadataValues, generate_bundle_id};
use crate::prompt;
use crate::staging::StagingArea;
use crate::ui::{ProgressReporter, reporter_for_terminal};
use crate::walker::{TreeWalker, WalkSummary};

/// Everything needed for one bundling run
#[derive(Debug, Clone)]
pub struct BundleRequest {
    /// Root directory, rendered verbatim in DIR-NAME
    pub root: PathBuf,
    /// Artifact path
    pub output: PathBuf,
    /// Metadata supplied on the command line
    pub values: MetadataValues,
    /// Whether missing metadata may be asked for
    pub interactive: bool,
}

/// Run the bundle command and print the summary line
pub fn run(request: &BundleRequest) -> Result<()> {
    let metadata = resolve_metadata(request)?;
    let mut progress = reporter_for_terminal();
    let total_files = bundle(request, &metadata, progress.as_mut())?;

    println!(
        "{} file created with {} files.",
        Style::new().bold().apply_to(request.output.display()),
        total_files
    );
    Ok(())
}

/// Whether prompts can be shown on this terminal
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Merge command-line values, bundleme.yaml and, when allowed, prompts
pub fn resolve_metadata(request: &BundleRequest) -> Result<BundleMetadata> {
    let mut values = request.values.clone();

    if let Some(config) = BundleConfig::load(&request.root)? {
        debug!(root = %request.root.display(), "using bundleme.yaml");
        values = values.or(config.into());
    }

    if request.interactive {
        values = values.fill_with(prompt::ask)?;
    }

    Ok(values.into_metadata(request.root.display().to_string(), generate_bundle_id()))
}

/// Walk, assemble and write the artifact; returns the number of files bundled
pub fn bundle(
    request: &BundleRequest,
    metadata: &BundleMetadata,
    progress: &mut dyn ProgressReporter,
) -> Result<usize> {
    let mut staging = StagingArea::new()?;
    let summary = match walk(&request.root, &request.output, &mut staging, progress) {
        Ok(summary) => summary,
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };
    progress.finish();

    if summary.stats.is_empty() {
        debug!(root = %request.root.display(), "no files found");
    } else if summary.stats.counted() < summary.total_files {
        debug!(
            dropped = summary.total_files - summary.stats.counted(),
            "files without a statistics entry"
        );
    }

    info!(
        files = summary.total_files,
        labels = summary.stats.entries().len(),
        lines = summary.captured_lines,
        staged_bytes = staging.bytes_staged(),
        truncated = summary.truncated_files,
        unreadable = summary.unreadable_files,
        "walk complete"
    );

    write_atomically(&request.output, |out| {
        assemble(
            out,
            &summary.stats,
            summary.total_files,
            staging,
            metadata,
        )
    })?;

    Ok(summary.total_files)
}

fn walk(
    root: &Path,
    output: &Path,
    staging: &mut StagingArea,
    progress: &mut dyn ProgressReporter,
) -> Result<WalkSummary> {
    let mut walker = TreeWalker::new().exclude(output);
    walker
        .walk(root, staging, progress)
        .map_err(|e| staging_failed(e.to_string()))?;
    Ok(walker.into_summary())
}
