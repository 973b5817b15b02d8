//! Progress presentation while a tree is walked
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! walker does not care whether a spinner is drawn. Progress only ever goes
//! to stderr; stdout carries the final summary line.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for a bundling run
pub trait ProgressReporter {
    /// A file was visited; `count` is the running total
    fn on_file(&mut self, path: &str, count: usize);

    /// Walk completed
    fn finish(&mut self);

    /// Walk aborted on error
    fn abandon(&mut self);
}

/// Spinner showing the running file count and the current path
pub struct SpinnerProgressReporter {
    pb: ProgressBar,
}

impl SpinnerProgressReporter {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {prefix:>6} files  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }
}

impl Default for SpinnerProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerProgressReporter {
    fn on_file(&mut self, path: &str, count: usize) {
        // Truncate long paths for display
        let chars = path.chars().count();
        let display_path = if chars > 50 {
            let tail: String = path.chars().skip(chars - 47).collect();
            format!("...{tail}")
        } else {
            path.to_string()
        };
        self.pb.set_prefix(count.to_string());
        self.pb.set_message(display_path);
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// Silent progress reporter for non-interactive runs
#[derive(Debug, Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn on_file(&mut self, _path: &str, _count: usize) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter: spinner on an interactive stderr, silent otherwise
pub fn reporter_for_terminal() -> Box<dyn ProgressReporter> {
    if std::io::stderr().is_terminal() {
        Box::new(SpinnerProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}
