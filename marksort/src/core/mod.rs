//! Deterministic, pure logic for sorting marks and explaining the work.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod engine;
pub mod format;
pub mod invariants;
pub mod normalize;
pub mod types;
