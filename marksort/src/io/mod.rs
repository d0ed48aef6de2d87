//! I/O helpers for marksort commands.

pub mod config;
