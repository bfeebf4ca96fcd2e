//! High-level counting API.
//!
//! This module provides the main entry points for counting lines in a single
//! file, several files, or any reader.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::Classifier;
use crate::options::CommentRule;
use crate::stats::{FileCounts, LineCounts};
use crate::Result;

/// Options for counting lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOptions {
    /// Where a `//` marker may appear for a comment line
    pub comment_rule: CommentRule,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment rule.
    pub fn comment_rule(mut self, rule: CommentRule) -> Self {
        self.comment_rule = rule;
        self
    }
}

/// Result of counting several files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Counts summed over all files
    pub total: LineCounts,
    /// Per-file counts, in input order
    pub files: Vec<FileCounts>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's counts to the result.
    pub fn add_file(&mut self, file: FileCounts) {
        self.total += file.counts;
        self.files.push(file);
    }

    /// Number of files counted
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Count lines from any reader.
pub fn count_reader<R: Read>(reader: R, options: &CountOptions) -> Result<LineCounts> {
    Classifier::from_reader(reader, options.comment_rule).finish()
}

/// Count lines in an in-memory string.
///
/// A byte slice reader never fails, so this returns the counts directly.
///
/// # Example
///
/// ```rust
/// use linecountlib::{count_str, CountOptions};
///
/// let counts = count_str("// a comment\ncode();\n\nint x;\n", &CountOptions::new());
/// assert_eq!(counts.total, 4);
/// assert_eq!(counts.blank, 1);
/// assert_eq!(counts.comment, 1);
/// ```
pub fn count_str(source: &str, options: &CountOptions) -> LineCounts {
    let mut classifier = Classifier::from_reader(source.as_bytes(), options.comment_rule);
    while let Ok(Some(_)) = classifier.next_line() {}
    classifier.counts()
}

/// Count lines in a single file.
///
/// Fails with [`crate::LineCountError::Unavailable`] if the file cannot be
/// opened, and with [`crate::LineCountError::ReadFailure`] if reading fails
/// part way through.
///
/// # Example
///
/// ```rust,ignore
/// use linecountlib::{count_file, CountOptions};
///
/// let counts = count_file("records.txt", &CountOptions::new())?;
/// println!("{counts}");
/// ```
pub fn count_file(path: impl AsRef<Path>, options: &CountOptions) -> Result<LineCounts> {
    Classifier::open(path, options.comment_rule)?.finish()
}

/// Count lines in several files, in order.
///
/// Stops at the first file that cannot be opened or read.
pub fn count_files<I, P>(paths: I, options: &CountOptions) -> Result<CountResult>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut result = CountResult::new();

    for path in paths {
        let path = path.into();
        let counts = count_file(&path, options)?;
        result.add_file(FileCounts::new(path, counts));
    }

    debug!(
        files = result.file_count(),
        total = result.total.total,
        "counted files"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LineCountError;
    use std::fs;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let file = write_file(
            temp.path(),
            "records.txt",
            "// a comment\ncode();\n\nint x;\n",
        );

        let counts = count_file(&file, &CountOptions::new()).unwrap();

        assert_eq!(counts.total, 4);
        assert_eq!(counts.blank, 1);
        assert_eq!(counts.comment, 1);
    }

    #[test]
    fn test_count_empty_file() {
        let temp = tempdir().unwrap();
        let file = write_file(temp.path(), "records.txt", "");

        let counts = count_file(&file, &CountOptions::new()).unwrap();

        assert_eq!(counts, LineCounts::new());
    }

    #[test]
    fn test_count_file_twice_is_stable() {
        let temp = tempdir().unwrap();
        let file = write_file(temp.path(), "records.txt", "//x\n\n  \ny\n    // z");

        let first = count_file(&file, &CountOptions::new()).unwrap();
        let second = count_file(&file, &CountOptions::new()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total, 5);
        assert_eq!(first.blank, 2);
        assert_eq!(first.comment, 1);
    }

    #[test]
    fn test_count_missing_file() {
        let temp = tempdir().unwrap();

        let err = count_file(temp.path().join("records.txt"), &CountOptions::new()).unwrap_err();

        assert!(err.is_unavailable());
        assert!(err.to_string().starts_with("Error in opening file"));
    }

    #[test]
    fn test_count_file_indented_rule() {
        let temp = tempdir().unwrap();
        let file = write_file(temp.path(), "a.c", "    // indented comment\n");

        let strict = count_file(&file, &CountOptions::new()).unwrap();
        let indented = count_file(
            &file,
            &CountOptions::new().comment_rule(CommentRule::Indented),
        )
        .unwrap();

        assert_eq!(strict.comment, 0);
        assert_eq!(indented.comment, 1);
    }

    #[test]
    fn test_count_files() {
        let temp = tempdir().unwrap();
        let a = write_file(temp.path(), "a.c", "// one\nint a;\n");
        let b = write_file(temp.path(), "b.c", "\n\n// two\n");

        let result = count_files([&a, &b], &CountOptions::new()).unwrap();

        assert_eq!(result.file_count(), 2);
        assert_eq!(result.files[0].path, a);
        assert_eq!(result.files[0].counts.total, 2);
        assert_eq!(result.files[1].counts.blank, 2);
        assert_eq!(result.total.total, 5);
        assert_eq!(result.total.blank, 2);
        assert_eq!(result.total.comment, 2);
    }

    #[test]
    fn test_count_files_stops_at_missing() {
        let temp = tempdir().unwrap();
        let a = write_file(temp.path(), "a.c", "x\n");
        let missing = temp.path().join("missing.c");

        let err = count_files([a, missing.clone()], &CountOptions::new()).unwrap_err();

        match err {
            LineCountError::Unavailable { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_count_reader_and_str_agree() {
        let source = "\n\n   \n\t\n";
        let from_reader = count_reader(source.as_bytes(), &CountOptions::new()).unwrap();
        let from_str = count_str(source, &CountOptions::new());

        assert_eq!(from_reader, from_str);
        assert_eq!(from_str.blank, 4);
    }
}
