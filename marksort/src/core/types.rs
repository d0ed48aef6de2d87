//! Shared deterministic types for the sorting core.
//!
//! These types define stable contracts between the normalizer, the engine and
//! the formatter. They carry no I/O and must render identically across runs.

use serde::Serialize;

/// One input value, as entered by the student.
pub type Mark = i64;

/// Algorithmic event that produced a [`StepRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// Snapshot of the marks before any work is done.
    Start,
    /// The next unsorted mark was picked up as the key.
    Incoming,
    /// `moved` was higher than the key and slid from `from` to `from + 1`.
    Shift { moved: Mark, from: usize },
    /// The key was dropped at `position`; the first `sorted_len` marks are ordered.
    Placement { position: usize, sorted_len: usize },
}

impl StepKind {
    /// Human-readable description of the transition, given the key in play.
    pub fn explain(&self, key: Option<Mark>) -> String {
        match (self, key) {
            (StepKind::Start, _) | (_, None) => {
                "We start with the marks exactly how the student entered them.".to_string()
            }
            (StepKind::Incoming, Some(key)) => format!(
                "A new mark ({key}) comes in. We now place it into the sorted section on the left."
            ),
            (StepKind::Shift { moved, .. }, Some(key)) => format!(
                "{moved} is higher than {key}, so it gets shifted one position to the right."
            ),
            (StepKind::Placement { position, sorted_len }, Some(key)) => format!(
                "{key} is placed at index {position}. Now the first {sorted_len} marks are fully sorted."
            ),
        }
    }
}

/// Immutable snapshot of the working array at one point of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 0-based position in the trace.
    pub index: usize,
    /// Mark being inserted, absent for the initial snapshot.
    pub current: Option<Mark>,
    #[serde(flatten)]
    pub kind: StepKind,
    /// Owned copy of the working array right after this transition.
    pub snapshot: Vec<Mark>,
    pub explanation: String,
}

/// Ordered, append-only log of [`StepRecord`]s.
///
/// Only the engine appends; callers get read-only access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<StepRecord>,
}

impl Trace {
    /// Record a transition, assigning the next index and copying `snapshot`.
    pub(crate) fn record(&mut self, kind: StepKind, current: Option<Mark>, snapshot: &[Mark]) {
        self.steps.push(StepRecord {
            index: self.steps.len(),
            current,
            kind,
            snapshot: snapshot.to_vec(),
            explanation: kind.explain(current),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn first(&self) -> Option<&StepRecord> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.last()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Everything one engine invocation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Input marks in ascending order.
    pub sorted: Vec<Mark>,
    pub trace: Trace,
    /// Guard evaluations that looked at a left neighbour.
    pub comparisons: u64,
    /// Rightward moves made to open a slot for a key.
    pub shifts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_assigns_sequential_indices_and_copies_snapshot() {
        let mut trace = Trace::default();
        let mut working = vec![2, 1];
        trace.record(StepKind::Start, None, &working);
        working[1] = 2;
        trace.record(StepKind::Shift { moved: 2, from: 0 }, Some(1), &working);

        let indices: Vec<usize> = trace.iter().map(|step| step.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(trace.as_slice()[0].snapshot, vec![2, 1]);
        assert_eq!(trace.as_slice()[1].snapshot, vec![2, 2]);
    }

    #[test]
    fn explanations_name_the_values_involved() {
        assert_eq!(
            StepKind::Incoming.explain(Some(65)),
            "A new mark (65) comes in. We now place it into the sorted section on the left."
        );
        assert_eq!(
            StepKind::Shift { moved: 73, from: 0 }.explain(Some(65)),
            "73 is higher than 65, so it gets shifted one position to the right."
        );
        assert_eq!(
            StepKind::Placement {
                position: 0,
                sorted_len: 2
            }
            .explain(Some(65)),
            "65 is placed at index 0. Now the first 2 marks are fully sorted."
        );
    }

    #[test]
    fn step_serializes_with_flattened_kind_tag() {
        let mut trace = Trace::default();
        trace.record(
            StepKind::Placement {
                position: 1,
                sorted_len: 2,
            },
            Some(4),
            &[3, 4],
        );
        let value = serde_json::to_value(&trace).expect("serialize");
        let step = &value[0];
        assert_eq!(step["kind"], "placement");
        assert_eq!(step["index"], 0);
        assert_eq!(step["position"], 1);
        assert_eq!(step["sorted_len"], 2);
        assert_eq!(step["current"], 4);
    }
}
