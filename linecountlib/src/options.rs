//! Input options that control how lines are classified.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where a `//` comment marker may appear for a line to count as a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentRule {
    /// The marker must be the first two bytes of the raw line.
    ///
    /// An indented comment such as `    // note` is not a comment line.
    #[default]
    LineStart,
    /// The marker may follow leading spaces and tabs.
    Indented,
}

impl CommentRule {
    /// Check whether a raw line (newline included or not) is a comment line.
    pub fn matches(self, line: &[u8]) -> bool {
        let rest = match self {
            CommentRule::LineStart => line,
            CommentRule::Indented => skip_indent(line),
        };
        rest.starts_with(b"//")
    }
}

/// Parses `line-start` or `indented`, ignoring case.
impl FromStr for CommentRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line-start" => Ok(CommentRule::LineStart),
            "indented" => Ok(CommentRule::Indented),
            _ => Err(format!("Unknown comment rule: {}", s)),
        }
    }
}

/// Strip leading spaces and horizontal tabs. Nothing else counts as indent.
pub(crate) fn skip_indent(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&b| b != b' ' && b != b'\t')
        .unwrap_or(line.len());
    &line[start..]
}
