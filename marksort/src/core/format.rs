//! Renders a [`RunResult`] into the summary and walkthrough texts.

use serde::{Deserialize, Serialize};

use crate::core::types::{Mark, RunResult, StepRecord, Trace};

/// Heading of the summary block.
pub const DEFAULT_TITLE: &str = "Exam Panic Sorter Summary";

/// Shown instead of the walkthrough when steps are turned off.
pub const STEPS_HIDDEN: &str = "Step-by-step output is hidden. Check the box above if you want to see how the algorithm works internally.";

/// How each step of the walkthrough is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TraceStyle {
    /// Bold step label, italic explanation.
    #[default]
    Markdown,
    /// Unadorned text with an indented explanation.
    Plain,
}

/// Summary and walkthrough, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub summary: String,
    pub trace: String,
}

/// Render both display texts for a finished run.
///
/// The trace is not read at all when `show_steps` is false.
pub fn format(
    result: &RunResult,
    original: &[Mark],
    show_steps: bool,
    style: TraceStyle,
) -> Rendered {
    format_titled(result, original, show_steps, style, DEFAULT_TITLE)
}

/// Like [`format`], with a custom summary heading.
pub fn format_titled(
    result: &RunResult,
    original: &[Mark],
    show_steps: bool,
    style: TraceStyle,
    title: &str,
) -> Rendered {
    let trace = if show_steps {
        format_trace(&result.trace, style)
    } else {
        STEPS_HIDDEN.to_string()
    };
    Rendered {
        summary: format_summary(result, original, title),
        trace,
    }
}

/// Title, original marks, sorted marks, then the two counters.
pub fn format_summary(result: &RunResult, original: &[Mark], title: &str) -> String {
    format!(
        "=== {title} ===\n\
         Original marks: {original:?}\n\
         Sorted marks:   {sorted:?}\n\
         \n\
         Total comparisons: {comparisons}\n\
         Total shifts:      {shifts}",
        sorted = result.sorted,
        comparisons = result.comparisons,
        shifts = result.shifts,
    )
}

/// Every step as a two-line block (snapshot, then explanation), in order.
pub fn format_trace(trace: &Trace, style: TraceStyle) -> String {
    trace.iter().map(|step| format_step(step, style)).collect()
}

fn format_step(step: &StepRecord, style: TraceStyle) -> String {
    match style {
        TraceStyle::Markdown => format!(
            "**Step {}:** {:?}  \n_{}_\n\n",
            step.index, step.snapshot, step.explanation
        ),
        TraceStyle::Plain => format!(
            "Step {}: {:?}\n    {}\n\n",
            step.index, step.snapshot, step.explanation
        ),
    }
}
