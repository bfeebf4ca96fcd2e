//! Core data structures for line counts

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Classification of a single line.
///
/// Both flags are derived from the raw line and never stored. Under the
/// default comment rule a line cannot be both blank and a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineKind {
    /// Nothing but spaces/tabs before the newline or end of line
    pub blank: bool,
    /// Starts with a `//` marker
    pub comment: bool,
}

/// Aggregate counts for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    /// Every line read, including a final unterminated one
    pub total: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
    /// Comment lines
    pub comment: u64,
}

impl LineCounts {
    /// Create counts with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line.
    pub fn record(&mut self, kind: LineKind) {
        self.total += 1;
        if kind.blank {
            self.blank += 1;
        }
        if kind.comment {
            self.comment += 1;
        }
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.blank += other.blank;
        self.comment += other.comment;
    }
}

/// The plain report, one count per line.
impl fmt::Display for LineCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lines: {}", self.total)?;
        writeln!(f, "Blank lines: {}", self.blank)?;
        write!(f, "Comment lines: {}", self.comment)
    }
}

/// Counts for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCounts {
    /// Path to the file
    pub path: PathBuf,
    /// Line counts for this file
    pub counts: LineCounts,
}

impl FileCounts {
    /// Create new file counts
    pub fn new(path: PathBuf, counts: LineCounts) -> Self {
        Self { path, counts }
    }
}
