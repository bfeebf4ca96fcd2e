//! Line-by-line classifier.
//!
//! Each line is read into a reusable growable buffer, so there is no maximum
//! line length: a long line is always counted once. Classification works on
//! raw bytes and never requires the input to be valid UTF-8.
//!
//! A line is:
//! - **blank** when, after skipping leading spaces and tabs, only a newline or
//!   the end of the line follows. A carriage return is content, so `"  \r\n"`
//!   is not blank.
//! - a **comment** when it starts with `//`, as decided by [`CommentRule`].
//!
//! The two checks are independent; under the default rule they can never both
//! hold for the same line.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::LineCountError;
use crate::options::{skip_indent, CommentRule};
use crate::stats::{LineCounts, LineKind};
use crate::Result;

/// Classify one raw line, newline included if present.
///
/// ```rust
/// use linecountlib::{classify_line, CommentRule};
///
/// let kind = classify_line(b" \t\n", CommentRule::LineStart);
/// assert!(kind.blank);
/// assert!(!kind.comment);
///
/// let kind = classify_line(b"    // indented\n", CommentRule::LineStart);
/// assert!(!kind.comment);
/// ```
pub fn classify_line(line: &[u8], rule: CommentRule) -> LineKind {
    let rest = skip_indent(line);
    LineKind {
        blank: matches!(rest.first(), None | Some(b'\n')),
        comment: rule.matches(line),
    }
}

/// Reads lines from a source and accumulates [`LineCounts`].
///
/// The classifier owns its reader; for files the handle is released when the
/// classifier is dropped, whether counting finished or failed.
pub struct Classifier<T: Read> {
    reader: BufReader<T>,
    rule: CommentRule,
    counts: LineCounts,
    line: Vec<u8>,
    path: Option<PathBuf>,
}

impl Classifier<File> {
    /// Open a file for classification.
    ///
    /// Fails with [`LineCountError::Unavailable`] if the file cannot be opened
    /// or is a directory.
    pub fn open(path: impl AsRef<Path>, rule: CommentRule) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| LineCountError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        // Opening a directory succeeds on Unix; reading it does not.
        let metadata = file.metadata().map_err(unavailable)?;
        if metadata.is_dir() {
            return Err(unavailable(std::io::Error::other("is a directory")));
        }

        debug!(path = %path.display(), "opened input");

        let mut classifier = Self::from_reader(file, rule);
        classifier.path = Some(path.to_path_buf());
        Ok(classifier)
    }
}

impl<T: Read> Classifier<T> {
    /// Create a classifier over any reader.
    pub fn from_reader(reader: T, rule: CommentRule) -> Self {
        Self {
            reader: BufReader::new(reader),
            rule,
            counts: LineCounts::new(),
            line: Vec::new(),
            path: None,
        }
    }

    /// Read and classify the next line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn next_line(&mut self) -> Result<Option<LineKind>> {
        self.line.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.line)
            .map_err(|e| self.read_error(e))?;
        if read == 0 {
            return Ok(None);
        }

        let kind = classify_line(&self.line, self.rule);
        self.counts.record(kind);
        trace!(
            line = self.counts.total,
            blank = kind.blank,
            comment = kind.comment,
            "classified line"
        );
        Ok(Some(kind))
    }

    /// Counts accumulated so far.
    pub fn counts(&self) -> LineCounts {
        self.counts
    }

    /// Consume the rest of the input and return the final counts.
    pub fn finish(mut self) -> Result<LineCounts> {
        while self.next_line()?.is_some() {}

        if let Some(path) = &self.path {
            debug!(
                path = %path.display(),
                total = self.counts.total,
                blank = self.counts.blank,
                comment = self.counts.comment,
                "counted input"
            );
        }
        Ok(self.counts)
    }

    fn read_error(&self, source: std::io::Error) -> LineCountError {
        let err = LineCountError::Io(source);
        match &self.path {
            Some(path) => err.with_path(path),
            None => err,
        }
    }
}
