//! # linecount
//!
//! A CLI tool that counts total, blank and comment lines in text files.
//!
//! ## Usage
//!
//! ```bash
//! # Count records.txt in the current directory
//! linecount
//!
//! # Count specific files (one block each plus a total)
//! linecount src/main.c src/util.c
//!
//! # Accept indented `//` comments
//! linecount --indented-comments main.c
//!
//! # Output as JSON
//! linecount main.c --output json
//! ```
//!
//! Set `LINECOUNT_LOG=debug` to see what is being read on stderr.

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use linecountlib::{count_files, CommentRule, CountOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::OutputFormat;

/// Input read when no path is given
const DEFAULT_INPUT: &str = "records.txt";

/// Environment variable holding the log filter
const LOG_ENV: &str = "LINECOUNT_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("linecount")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts total, blank and comment lines in text files")
        .arg(
            Arg::new("path")
                .help("Files to count (defaults to records.txt)")
                .action(ArgAction::Append)
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("indented-comments")
                .long("indented-comments")
                .action(ArgAction::SetTrue)
                .help("Count `//` comments that follow leading spaces or tabs"),
        )
}

/// Install the stderr log subscriber
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Keeps an already installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build count options from matches
fn build_options(matches: &ArgMatches) -> CountOptions {
    let rule = if matches.get_flag("indented-comments") {
        CommentRule::Indented
    } else {
        CommentRule::LineStart
    };
    CountOptions::new().comment_rule(rule)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let paths: Vec<String> = matches
        .get_many::<String>("path")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let format: OutputFormat = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let options = build_options(matches);

    debug!(?paths, ?format, rule = ?options.comment_rule, "counting");

    let result = count_files(&paths, &options)?;
    render::render(&result, format)
}

fn main() -> ExitCode {
    init_logging();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let prefix = Style::new().for_stderr().red().bold().apply_to("Error:");
            eprintln!("{prefix} {e}");
            ExitCode::FAILURE
        }
    }
}
