//! Insertion sort that records every state transition.
//!
//! The engine works on a private copy of the input. Each transition appends a
//! [`StepRecord`](crate::core::types::StepRecord) holding a full snapshot of
//! the working array, so the trace can be replayed without re-running the sort.

use tracing::{debug, instrument};

use crate::core::types::{Mark, RunResult, StepKind, Trace};

/// Sort `marks` ascending and return the sorted copy with its full trace.
///
/// A comparison is counted each time the key is tested against a left
/// neighbour, including the final test that stops the scan. Reaching the left
/// boundary is not a comparison. Equal marks never shift past each other.
#[instrument(level = "debug", skip_all, fields(len = marks.len()))]
pub fn sort_with_trace(marks: &[Mark]) -> RunResult {
    let mut working = marks.to_vec();
    let mut trace = Trace::default();
    let mut comparisons = 0u64;
    let mut shifts = 0u64;

    trace.record(StepKind::Start, None, &working);

    for i in 1..working.len() {
        let key = working[i];
        trace.record(StepKind::Incoming, Some(key), &working);

        // `hole` is the slot the key would occupy if placed now.
        let mut hole = i;
        while hole > 0 {
            comparisons += 1;
            let left = working[hole - 1];
            if left <= key {
                break;
            }
            working[hole] = left;
            shifts += 1;
            trace.record(
                StepKind::Shift {
                    moved: left,
                    from: hole - 1,
                },
                Some(key),
                &working,
            );
            hole -= 1;
        }

        working[hole] = key;
        trace.record(
            StepKind::Placement {
                position: hole,
                sorted_len: i + 1,
            },
            Some(key),
            &working,
        );
    }

    debug!(comparisons, shifts, steps = trace.len(), "sort finished");

    RunResult {
        sorted: working,
        trace,
        comparisons,
        shifts,
    }
}
