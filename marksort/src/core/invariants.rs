//! Laws every [`RunResult`] must satisfy, checked after the fact.

use std::collections::BTreeMap;

use crate::core::types::{Mark, RunResult, StepKind};

/// Check a finished run against the input it was produced from:
/// - Output is ascending and a permutation of `original`
/// - Step indices are `0..len` in order
/// - First step is the untouched input, last step is the output
/// - `len(trace) == 1 + 2 * (n - 1) + shifts` (or 1 when `n == 0`)
/// - `comparisons >= shifts`, both zero for `n <= 1`
///
/// Returns stable error messages (empty on success).
pub fn validate_run(original: &[Mark], result: &RunResult) -> Vec<String> {
    let mut errors = Vec::new();
    let n = original.len();

    if !result.sorted.windows(2).all(|pair| pair[0] <= pair[1]) {
        errors.push(format!("output not ascending: {:?}", result.sorted));
    }

    if multiset(original) != multiset(&result.sorted) {
        errors.push(format!(
            "output {:?} is not a permutation of input {:?}",
            result.sorted, original
        ));
    }

    for (expected, step) in result.trace.iter().enumerate() {
        if step.index != expected {
            errors.push(format!(
                "step at position {} has index {}",
                expected, step.index
            ));
        }
    }

    match result.trace.first() {
        Some(step) => {
            if step.kind != StepKind::Start || step.current.is_some() {
                errors.push("first step must be the start snapshot".to_string());
            }
            if step.snapshot != original {
                errors.push(format!(
                    "start snapshot {:?} differs from input {:?}",
                    step.snapshot, original
                ));
            }
        }
        None => errors.push("trace is empty".to_string()),
    }

    if let Some(step) = result.trace.last() {
        if step.snapshot != result.sorted {
            errors.push(format!(
                "last snapshot {:?} differs from output {:?}",
                step.snapshot, result.sorted
            ));
        }
    }

    let expected_len = expected_trace_len(n, result.shifts);
    if result.trace.len() as u64 != expected_len {
        errors.push(format!(
            "trace has {} steps, expected {} for {} marks and {} shifts",
            result.trace.len(),
            expected_len,
            n,
            result.shifts
        ));
    }

    if result.comparisons < result.shifts {
        errors.push(format!(
            "comparisons {} below shifts {}",
            result.comparisons, result.shifts
        ));
    }

    if n <= 1 && (result.comparisons != 0 || result.shifts != 0) {
        errors.push(format!(
            "{} marks must not compare or shift (comparisons={}, shifts={})",
            n, result.comparisons, result.shifts
        ));
    }

    errors
}

/// One start step, then an incoming and a placement step per insertion plus one
/// step per shift.
pub fn expected_trace_len(n: usize, shifts: u64) -> u64 {
    match n {
        0 => 1,
        n => 1 + 2 * (n as u64 - 1) + shifts,
    }
}

fn multiset(marks: &[Mark]) -> BTreeMap<Mark, usize> {
    let mut counts = BTreeMap::new();
    for &mark in marks {
        *counts.entry(mark).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::sort_with_trace;

    #[test]
    fn accepts_engine_output() {
        let input = [3, 1, 2];
        let result = sort_with_trace(&input);
        assert!(validate_run(&input, &result).is_empty());
    }

    #[test]
    fn trace_len_law_matches_golden_counts() {
        assert_eq!(expected_trace_len(0, 0), 1);
        assert_eq!(expected_trace_len(1, 0), 1);
        assert_eq!(expected_trace_len(3, 2), 7);
        assert_eq!(expected_trace_len(3, 0), 5);
    }

    #[test]
    fn reports_tampered_results() {
        let input = [3, 1, 2];
        let mut result = sort_with_trace(&input);
        result.sorted = vec![1, 3, 3];
        result.comparisons = 1;

        let errors = validate_run(&input, &result);
        assert!(errors.iter().any(|err| err.contains("not ascending")));
        assert!(errors.iter().any(|err| err.contains("not a permutation")));
        assert!(errors.iter().any(|err| err.contains("last snapshot")));
        assert!(errors.iter().any(|err| err.contains("below shifts")));
    }

    #[test]
    fn reports_trace_that_does_not_start_from_input() {
        let result = sort_with_trace(&[2, 1]);
        let errors = validate_run(&[1, 2], &result);
        assert!(errors.iter().any(|err| err.contains("start snapshot")));
    }

    #[test]
    fn reports_work_on_trivial_inputs() {
        let mut result = sort_with_trace(&[7]);
        result.comparisons = 1;
        let errors = validate_run(&[7], &result);
        assert!(errors.iter().any(|err| err.contains("must not compare")));
    }
}
