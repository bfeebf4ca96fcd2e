//! # linecountlib
//!
//! A small library that reads text files line by line and counts total lines,
//! blank lines and comment lines.
//!
//! ## Classification
//!
//! - **Blank**: after leading spaces and tabs, nothing but the newline remains
//! - **Comment**: the raw line starts with `//` (see [`CommentRule`] for the
//!   opt-in rule that accepts indented comments)
//! - **Total**: every line, including a final line without a newline
//!
//! Lines are read into a growable buffer, so there is no line length limit,
//! and classification works on bytes, so input need not be UTF-8.
//!
//! ## Example
//!
//! ```rust
//! use linecountlib::{count_file, count_str, CommentRule, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("records.txt");
//! fs::write(&path, "// a comment\ncode();\n\n    // indented\n").unwrap();
//!
//! let counts = count_file(&path, &CountOptions::new()).unwrap();
//! assert_eq!(counts.total, 4);
//! assert_eq!(counts.blank, 1);
//! assert_eq!(counts.comment, 1);
//!
//! let options = CountOptions::new().comment_rule(CommentRule::Indented);
//! let counts = count_str("    // indented\n", &options);
//! assert_eq!(counts.comment, 1);
//! ```

pub mod classifier;
pub mod counter;
pub mod error;
pub mod options;
pub mod stats;

pub use classifier::{classify_line, Classifier};
pub use counter::{count_file, count_files, count_reader, count_str, CountOptions, CountResult};
pub use error::LineCountError;
pub use options::CommentRule;
pub use stats::{FileCounts, LineCounts, LineKind};

/// Result type for linecountlib operations
pub type Result<T> = std::result::Result<T, LineCountError>;
