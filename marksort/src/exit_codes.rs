//! Stable exit codes for marksort CLI commands.

/// Marks were sorted, or the command succeeded.
pub const OK: i32 = 0;
/// Input contained a token that is not a whole number, or config/IO failed.
pub const INVALID: i32 = 1;
/// Input was blank or held no marks.
pub const EMPTY: i32 = 2;
