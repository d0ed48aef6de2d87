//! Insertion-sort tutor for exam marks.
//!
//! Reads a comma-separated list of marks, sorts it with an instrumented
//! insertion sort and prints a summary plus a step-by-step walkthrough.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use marksort::core::format::TraceStyle;
use marksort::core::normalize::InputError;
use marksort::core::types::RunResult;
use marksort::exit_codes;
use marksort::io::config::{DEFAULT_CONFIG_FILE, SorterConfig, load_config, write_config};
use marksort::logging;
use marksort::session::{RunOutcome, run_with};

#[derive(Parser)]
#[command(
    name = "marksort",
    version,
    about = "Sort exam marks with insertion sort and explain every step"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort marks and print the summary and walkthrough.
    Sort {
        /// Comma-separated marks (e.g. "73, 65, 80"). Read from stdin if omitted.
        marks: Option<String>,
        /// Print only the summary; replace the walkthrough with a placeholder.
        #[arg(long, conflicts_with = "show_steps")]
        hide_steps: bool,
        /// Print the walkthrough even if the config hides it.
        #[arg(long)]
        show_steps: bool,
        /// Walkthrough layout.
        #[arg(long, value_enum)]
        style: Option<TraceStyle>,
        /// Emit a single JSON report instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check that input parses to at least one mark, without sorting.
    Check {
        /// Comma-separated marks. Read from stdin if omitted.
        marks: Option<String>,
    },
    /// Write the default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

/// Machine-readable result of `marksort sort --json`.
#[derive(Serialize)]
struct RunReport<'a> {
    outcome: &'static str,
    summary: &'a str,
    trace: &'a str,
    result: Option<&'a RunResult>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sort {
            marks,
            hide_steps,
            show_steps,
            style,
            json,
        } => cmd_sort(
            &cli.config,
            marks,
            SortFlags {
                hide_steps,
                show_steps,
                style,
                json,
            },
        ),
        Command::Check { marks } => cmd_check(marks),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

struct SortFlags {
    hide_steps: bool,
    show_steps: bool,
    style: Option<TraceStyle>,
    json: bool,
}

fn cmd_sort(config_path: &Path, marks: Option<String>, flags: SortFlags) -> Result<i32> {
    let cfg = load_config(config_path)?;
    let mut options = cfg.display_options();
    if flags.hide_steps {
        options.show_steps = false;
    }
    if flags.show_steps {
        options.show_steps = true;
    }
    if let Some(style) = flags.style {
        options.style = style;
    }

    let raw = marks_or_stdin(marks)?;
    let output = run_with(&raw, &options);
    let code = output.outcome.exit_code();
    debug!(code, show_steps = options.show_steps, "sort finished");

    if flags.json {
        let report = RunReport {
            outcome: outcome_label(&output.outcome),
            summary: &output.summary,
            trace: &output.trace,
            result: output.outcome.result(),
        };
        let payload = serde_json::to_string_pretty(&report).context("serialize run report")?;
        println!("{payload}");
    } else {
        println!("{}\n", output.summary);
        print!("{}", output.trace);
        if !output.trace.ends_with('\n') {
            println!();
        }
    }
    Ok(code)
}

fn cmd_check(marks: Option<String>) -> Result<i32> {
    let raw = marks_or_stdin(marks)?;
    match marksort::session::check_input(&raw) {
        Ok(marks) => {
            println!("{} marks", marks.len());
            Ok(exit_codes::OK)
        }
        Err(err @ InputError::Empty) => {
            eprintln!("{err}");
            Ok(exit_codes::EMPTY)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(exit_codes::INVALID)
        }
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        info!(path = %config_path.display(), "config exists, leaving it untouched");
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &SorterConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    info!(path = %config_path.display(), "wrote default config");
    Ok(exit_codes::OK)
}

/// Use the positional argument, or the first line of stdin.
fn marks_or_stdin(marks: Option<String>) -> Result<String> {
    if let Some(marks) = marks {
        return Ok(marks);
    }
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read marks from stdin")?;
    Ok(line)
}

fn outcome_label(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Sorted(_) => "sorted",
        RunOutcome::Blank => "blank",
        RunOutcome::InvalidInput(_) => "invalid_input",
        RunOutcome::NoMarks => "no_marks",
    }
}
