//! Boundary between a front end and the sorting core.
//!
//! A front end hands over the raw text box contents and the "show steps"
//! toggle. It receives two display strings back. Input problems never escape
//! as errors; they become fixed messages.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::engine::sort_with_trace;
use crate::core::format::{DEFAULT_TITLE, TraceStyle, format_titled};
use crate::core::invariants::validate_run;
use crate::core::normalize::{InputError, parse_marks};
use crate::core::types::{Mark, RunResult};
use crate::exit_codes;

pub const BLANK_SUMMARY: &str = "Please enter at least one mark.";
pub const NO_MARKS_SUMMARY: &str = "Please enter at least one valid mark.";
pub const NO_STEPS: &str = "No steps to show.";
pub const INVALID_SUMMARY: &str =
    "Error: only type whole numbers separated by commas (example: 73, 65, 80).";
pub const INVALID_STEPS: &str = "Steps are hidden because the input was invalid.";

/// Display choices a front end can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_steps: bool,
    pub style: TraceStyle,
    pub title: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_steps: true,
            style: TraceStyle::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// What happened to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Marks were parsed and sorted.
    Sorted(RunResult),
    /// Input was empty or whitespace only.
    Blank,
    /// A segment was not a whole number.
    InvalidInput(#[serde(serialize_with = "serialize_display")] InputError),
    /// Input held only separators.
    NoMarks,
}

impl RunOutcome {
    /// Process exit code a CLI should report for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Sorted(_) => exit_codes::OK,
            RunOutcome::InvalidInput(_) => exit_codes::INVALID,
            RunOutcome::Blank | RunOutcome::NoMarks => exit_codes::EMPTY,
        }
    }

    pub fn result(&self) -> Option<&RunResult> {
        match self {
            RunOutcome::Sorted(result) => Some(result),
            _ => None,
        }
    }
}

/// Display texts plus the structured outcome behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub summary: String,
    pub trace: String,
    pub outcome: RunOutcome,
}

impl RunOutput {
    fn message(summary: &str, trace: &str, outcome: RunOutcome) -> Self {
        Self {
            summary: summary.to_string(),
            trace: trace.to_string(),
            outcome,
        }
    }
}

/// Parse, sort and render `raw` with the default markdown walkthrough.
pub fn run(raw: &str, show_steps: bool) -> RunOutput {
    run_with(
        raw,
        &DisplayOptions {
            show_steps,
            ..DisplayOptions::default()
        },
    )
}

/// Parse, sort and render `raw` with explicit display options.
pub fn run_with(raw: &str, options: &DisplayOptions) -> RunOutput {
    if raw.trim().is_empty() {
        debug!("blank input");
        return RunOutput::message(BLANK_SUMMARY, NO_STEPS, RunOutcome::Blank);
    }

    let marks = match parse_marks(raw) {
        Ok(marks) => marks,
        Err(err) => {
            debug!(error = %err, "rejecting input");
            return RunOutput::message(
                INVALID_SUMMARY,
                INVALID_STEPS,
                RunOutcome::InvalidInput(err),
            );
        }
    };

    if marks.is_empty() {
        debug!("input held no marks");
        return RunOutput::message(NO_MARKS_SUMMARY, NO_STEPS, RunOutcome::NoMarks);
    }

    let result = sort_marks(&marks);
    let rendered = format_titled(
        &result,
        &marks,
        options.show_steps,
        options.style,
        &options.title,
    );
    RunOutput {
        summary: rendered.summary,
        trace: rendered.trace,
        outcome: RunOutcome::Sorted(result),
    }
}

/// Classify raw input without sorting it.
pub fn check_input(raw: &str) -> Result<Vec<Mark>, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }
    let marks = parse_marks(raw)?;
    if marks.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(marks)
}

fn sort_marks(marks: &[Mark]) -> RunResult {
    let result = sort_with_trace(marks);
    let violations = validate_run(marks, &result);
    if !violations.is_empty() {
        warn!(violations = ?violations, "sort run broke trace invariants");
    }
    result
}

fn serialize_display<S: serde::Serializer>(
    err: &InputError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::STEPS_HIDDEN;
    use crate::test_support::{marks_line, pseudo_random_marks};

    #[test]
    fn blank_input_asks_for_a_mark() {
        for raw in ["", "   ", "\t\n"] {
            let output = run(raw, true);
            assert_eq!(output.summary, BLANK_SUMMARY);
            assert_eq!(output.trace, NO_STEPS);
            assert_eq!(output.outcome, RunOutcome::Blank);
        }
    }

    #[test]
    fn invalid_token_shows_format_hint() {
        let output = run("73, abc, 80", true);
        assert_eq!(output.summary, INVALID_SUMMARY);
        assert!(output.summary.contains("73, 65, 80"));
        assert_eq!(output.trace, INVALID_STEPS);
        assert_eq!(
            output.outcome,
            RunOutcome::InvalidInput(InputError::InvalidToken {
                token: "abc".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn separators_only_ask_for_a_valid_mark() {
        let output = run(", ,,", true);
        assert_eq!(output.summary, NO_MARKS_SUMMARY);
        assert_eq!(output.trace, NO_STEPS);
        assert_eq!(output.outcome, RunOutcome::NoMarks);
    }

    #[test]
    fn sorted_output_matches_golden_counts() {
        let output = run("3, 1, 2", true);
        let result = output.outcome.result().expect("sorted");
        assert_eq!(result.sorted, vec![1, 2, 3]);
        assert_eq!(result.comparisons, 3);
        assert_eq!(result.shifts, 2);
        assert_eq!(result.trace.len(), 7);
        assert!(output.summary.contains("Original marks: [3, 1, 2]"));
        assert!(output.summary.contains("Sorted marks:   [1, 2, 3]"));
        assert!(output.trace.starts_with("**Step 0:** [3, 1, 2]  \n"));
        assert!(output.trace.contains("**Step 6:** [1, 2, 3]"));
    }

    #[test]
    fn equal_marks_report_no_shifts() {
        let output = run("5,5,5", true);
        let result = output.outcome.result().expect("sorted");
        assert_eq!(result.sorted, vec![5, 5, 5]);
        assert_eq!(result.comparisons, 2);
        assert_eq!(result.shifts, 0);
        assert!(output.summary.ends_with("Total shifts:      0"));
    }

    #[test]
    fn hiding_steps_returns_placeholder() {
        let output = run("9, 4, 7, 1", false);
        assert_eq!(output.trace, STEPS_HIDDEN);
        assert_eq!(output.outcome.exit_code(), exit_codes::OK);
    }

    #[test]
    fn options_control_style_and_title() {
        let options = DisplayOptions {
            show_steps: true,
            style: TraceStyle::Plain,
            title: "Quiz Marks".to_string(),
        };
        let output = run_with("2, 1", &options);
        assert!(output.summary.starts_with("=== Quiz Marks ===\n"));
        assert!(output.trace.starts_with("Step 0: [2, 1]\n"));
    }

    #[test]
    fn exit_codes_follow_outcome() {
        assert_eq!(run("", true).outcome.exit_code(), exit_codes::EMPTY);
        assert_eq!(run(",", true).outcome.exit_code(), exit_codes::EMPTY);
        assert_eq!(run("1.5", true).outcome.exit_code(), exit_codes::INVALID);
        assert_eq!(run("1", true).outcome.exit_code(), exit_codes::OK);
    }

    #[test]
    fn check_input_folds_blank_cases_into_empty() {
        assert_eq!(check_input("  "), Err(InputError::Empty));
        assert_eq!(check_input(",,"), Err(InputError::Empty));
        assert_eq!(check_input("4, 2"), Ok(vec![4, 2]));
        assert!(matches!(
            check_input("4, two"),
            Err(InputError::InvalidToken { .. })
        ));
    }

    #[test]
    fn sweep_of_generated_inputs_sorts_and_counts() {
        for seed in 1..40u64 {
            let marks = pseudo_random_marks(seed, (seed % 12) as usize + 1);
            let output = run(&marks_line(&marks), false);
            let result = output.outcome.result().expect("sorted");

            let mut expected = marks.clone();
            expected.sort();
            assert_eq!(result.sorted, expected, "seed {seed}");
            assert!(validate_run(&marks, result).is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let value = serde_json::to_value(run("x", true).outcome).expect("serialize");
        assert_eq!(value["status"], "invalid_input");
        assert_eq!(value["detail"], "invalid number token 'x' at position 0");

        let value = serde_json::to_value(run("", true).outcome).expect("serialize");
        assert_eq!(value["status"], "blank");
    }
}
