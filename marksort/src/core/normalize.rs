//! Turns a comma-separated line of marks into a sequence of integers.

use thiserror::Error;

use crate::core::types::Mark;

/// Reasons raw input cannot be sorted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A comma-separated segment is not a whole number.
    #[error("invalid number token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
    /// Nothing left to sort after normalization.
    #[error("no marks entered")]
    Empty,
}

/// Parse `raw` into marks, in the order entered.
///
/// Empty segments (trailing or doubled commas, blank input) are skipped, so an
/// all-blank line yields `Ok(vec![])`. Deciding whether that is acceptable is
/// left to the caller. The first malformed segment aborts the whole parse.
pub fn parse_marks(raw: &str) -> Result<Vec<Mark>, InputError> {
    let mut marks = Vec::new();
    for (position, segment) in raw.split(',').enumerate() {
        let token = segment.trim();
        if token.is_empty() {
            continue;
        }
        let mark = parse_token(token).ok_or_else(|| InputError::InvalidToken {
            token: token.to_string(),
            position,
        })?;
        marks.push(mark);
    }
    Ok(marks)
}

/// Optional sign followed by ASCII digits; anything else (or overflow) is rejected.
fn parse_token(token: &str) -> Option<Mark> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
