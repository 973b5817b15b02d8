//! Per-label file statistics
//!
//! Labels keep first-seen order. The table holds at most [`MAX_LABELS`]
//! distinct labels; files carrying a label that does not fit are still
//! counted in the run total but never appear in the table.

/// Maximum number of distinct labels tracked
pub const MAX_LABELS: usize = 100;

/// Count of files sharing one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStat {
    pub label: String,
    pub count: usize,
}

/// Ordered, bounded label → count table
#[derive(Debug, Clone)]
pub struct TypeStats {
    entries: Vec<TypeStat>,
    capacity: usize,
}

impl Default for TypeStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeStats {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LABELS)
    }

    /// Create a table that accepts at most `capacity` distinct labels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Count one file under `label`
    ///
    /// Returns `false` when the label is new and the table is already full.
    pub fn record(&mut self, label: &str) -> bool {
        if let Some(stat) = self.entries.iter_mut().find(|s| s.label == label) {
            stat.count += 1;
            return true;
        }

        if self.entries.len() >= self.capacity {
            return false;
        }

        self.entries.push(TypeStat {
            label: label.to_string(),
            count: 1,
        });
        true
    }

    pub fn entries(&self) -> &[TypeStat] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts in the table
    pub fn counted(&self) -> usize {
        self.entries.iter().map(|s| s.count).sum()
    }
}

/// Share of `count` in `total`, in percent
///
/// An empty project yields `0.0` instead of dividing by zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}
