//! Insertion-sort tutor for exam marks.
//!
//! Sorts a short list of integers and records every step of the insertion
//! sort (each incoming mark, each shift, each placement) with a plain-language
//! explanation. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, sorting, formatting).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration files).
//!
//! [`session`] is the entry point a front end calls: raw text in, display text out.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
