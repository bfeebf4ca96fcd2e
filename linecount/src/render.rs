//! Report rendering for CLI output

use anyhow::Context;
use console::Style;
use linecountlib::{CountResult, LineCounts};
use std::str::FromStr;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain `Lines:` / `Blank lines:` / `Comment lines:` report
    #[default]
    Text,
    /// Pretty-printed JSON of the full result
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

fn header_style() -> Style {
    Style::new().bold()
}

fn push_counts(output: &mut String, counts: &LineCounts) {
    output.push_str(&counts.to_string());
    output.push('\n');
}

/// Render the text report.
///
/// A single file produces exactly the three report lines. Several files get a
/// block each, followed by the summed totals.
pub fn render_text(result: &CountResult) -> String {
    let mut output = String::new();

    if result.file_count() <= 1 {
        push_counts(&mut output, &result.total);
        return output;
    }

    let style = header_style();
    for file in &result.files {
        let header = format!("{}:", file.path.display());
        output.push_str(&style.apply_to(header).to_string());
        output.push('\n');
        push_counts(&mut output, &file.counts);
        output.push('\n');
    }

    let header = format!("Total ({} files):", result.file_count());
    output.push_str(&style.apply_to(header).to_string());
    output.push('\n');
    push_counts(&mut output, &result.total);
    output
}

/// Render the result as pretty JSON.
pub fn render_json(result: &CountResult) -> serde_json::Result<String> {
    let mut output = serde_json::to_string_pretty(result)?;
    output.push('\n');
    Ok(output)
}

/// Render the result in the requested format.
pub fn render(result: &CountResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result).context("failed to render JSON output"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linecountlib::FileCounts;
    use std::path::PathBuf;

    fn counts(total: u64, blank: u64, comment: u64) -> LineCounts {
        LineCounts {
            total,
            blank,
            comment,
        }
    }

    fn result(files: &[(&str, LineCounts)]) -> CountResult {
        let mut result = CountResult::new();
        for (path, c) in files {
            result.add_file(FileCounts::new(PathBuf::from(path), *c));
        }
        result
    }

    #[test]
    fn single_file_report() {
        let result = result(&[("records.txt", counts(4, 1, 1))]);

        assert_eq!(
            render_text(&result),
            "Lines: 4\nBlank lines: 1\nComment lines: 1\n"
        );
    }

    #[test]
    fn multi_file_report() {
        console::set_colors_enabled(false);
        let result = result(&[("a.c", counts(2, 0, 1)), ("b.c", counts(3, 2, 1))]);
        let text = render_text(&result);

        assert!(text.starts_with("a.c:\nLines: 2\n"));
        assert!(text.contains("b.c:\nLines: 3\nBlank lines: 2\n"));
        assert!(text.ends_with("Total (2 files):\nLines: 5\nBlank lines: 2\nComment lines: 2\n"));
    }

    #[test]
    fn json_report() {
        let result = result(&[("records.txt", counts(4, 1, 1))]);
        let json = render(&result, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["total"]["total"], 4);
        assert_eq!(parsed["total"]["blank"], 1);
        assert_eq!(parsed["files"][0]["path"], "records.txt");
        assert_eq!(parsed["files"][0]["counts"]["comment"], 1);
    }

    #[test]
    fn text_format_matches_text_report() {
        let result = result(&[("records.txt", counts(1, 0, 0))]);
        let text = render(&result, OutputFormat::Text).unwrap();

        assert_eq!(text, render_text(&result));
        assert_eq!(text, "Lines: 1\nBlank lines: 0\nComment lines: 0\n");
    }

    #[test]
    fn parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
