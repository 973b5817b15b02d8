//! Recursive project walk
//!
//! Depth-first, pre-order, in file-system enumeration order. Symlinks are
//! followed the way `stat` would. Directories that cannot be read and entries
//! whose status cannot be obtained are skipped silently; every other
//! non-directory node is counted, classified and captured.

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::capture::{CaptureOutcome, capture};
use crate::classify::classify;
use crate::stats::TypeStats;
use crate::ui::ProgressReporter;

/// Accumulated results of a walk
#[derive(Debug, Clone)]
pub struct WalkSummary {
    pub stats: TypeStats,
    pub total_files: usize,
    /// Lines copied into the staged blocks
    pub captured_lines: usize,
    /// Files cut off after the line limit
    pub truncated_files: usize,
    /// Files written as CANNOT OPEN FILE placeholders
    pub unreadable_files: usize,
}

/// A file that must never be bundled, identified by name and parent directory
#[derive(Debug, Clone)]
struct Excluded {
    name: OsString,
    parent: PathBuf,
}

/// Walks a tree, feeding every file through the classifier and capturer
#[derive(Debug)]
pub struct TreeWalker {
    summary: WalkSummary,
    excluded: Vec<Excluded>,
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::with_stats(TypeStats::new())
    }

    /// Start from an existing statistics table
    pub fn with_stats(stats: TypeStats) -> Self {
        Self {
            summary: WalkSummary {
                stats,
                total_files: 0,
                captured_lines: 0,
                truncated_files: 0,
                unreadable_files: 0,
            },
            excluded: Vec::new(),
        }
    }

    /// Never visit `path`, even when it sits inside the walked tree
    ///
    /// The path does not have to exist yet; its parent directory does.
    pub fn exclude(mut self, path: &Path) -> Self {
        let Some(name) = path.file_name() else {
            return self;
        };
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        match parent.canonicalize() {
            Ok(parent) => self.excluded.push(Excluded {
                name: name.to_os_string(),
                parent,
            }),
            Err(e) => debug!(path = %path.display(), error = %e, "exclusion ignored"),
        }
        self
    }

    /// Walk `root`, appending one block per file to `sink`
    ///
    /// Only write failures on `sink` are returned.
    pub fn walk<W: Write>(
        &mut self,
        root: &Path,
        sink: &mut W,
        progress: &mut dyn ProgressReporter,
    ) -> io::Result<()> {
        let walker = WalkDir::new(root).min_depth(1).follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            if self.is_excluded(entry.path()) {
                debug!(path = %entry.path().display(), "skipping excluded file");
                continue;
            }

            self.visit_file(entry.path(), entry.file_name(), sink)?;

            let shown = entry.path().strip_prefix(root).unwrap_or(entry.path());
            progress.on_file(&shown.display().to_string(), self.summary.total_files);
        }

        Ok(())
    }

    fn visit_file<W: Write>(&mut self, path: &Path, name: &OsStr, sink: &mut W) -> io::Result<()> {
        self.summary.total_files += 1;

        let file_type = classify(&name.to_string_lossy());
        if !self.summary.stats.record(file_type.label()) {
            debug!(label = file_type.label(), "statistics table full, label dropped");
        }

        match capture(path, name, sink)? {
            CaptureOutcome::Captured { lines, truncated } => {
                self.summary.captured_lines += lines;
                if truncated {
                    self.summary.truncated_files += 1;
                }
            }
            CaptureOutcome::Unreadable => self.summary.unreadable_files += 1,
            CaptureOutcome::Binary => {}
        }
        Ok(())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        self.excluded.iter().any(|ex| {
            ex.name == name
                && path
                    .parent()
                    .and_then(|p| p.canonicalize().ok())
                    .is_some_and(|p| p == ex.parent)
        })
    }

    pub fn into_summary(self) -> WalkSummary {
        self.summary
    }
}
