//! Test-only helpers for inspecting sort runs.

use crate::core::types::{Mark, RunResult, StepKind};

/// Snapshots of every step, in trace order.
pub fn snapshots(result: &RunResult) -> Vec<Vec<Mark>> {
    result
        .trace
        .iter()
        .map(|step| step.snapshot.clone())
        .collect()
}

/// Event kinds of every step, in trace order.
pub fn kinds(result: &RunResult) -> Vec<StepKind> {
    result.trace.iter().map(|step| step.kind).collect()
}

/// Render marks the way a student would type them (`"3, 1, 2"`).
pub fn marks_line(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(Mark::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deterministic pseudo-random marks in `0..100` (xorshift), for sweep tests.
pub fn pseudo_random_marks(seed: u64, len: usize) -> Vec<Mark> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 100) as Mark
        })
        .collect()
}
