//! Raw form input sanitizing.
//!
//! # Responsibility
//! - Convert free-form word-count text into an optional integer.
//! - Convert date-picker text (`YYYY-MM-DD`) into an optional calendar date.
//!
//! # Invariants
//! - Word-count parsing never fails; unusable text maps to `None`.
//! - Blank date text is "not set yet", not an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid non-digit regex"));

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Input parse errors surfaced to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidDate(String),
    UnsupportedLocale(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid target date `{value}`; expected YYYY-MM-DD")
            }
            Self::UnsupportedLocale(value) => {
                write!(f, "unsupported locale `{value}`; expected ru|en")
            }
        }
    }
}

impl Error for InputError {}

/// Parses a word count from raw text, ignoring every non-digit character.
///
/// Group separators, spaces and stray letters are dropped, so `"12 500"`,
/// `"12,500"` and `"12.500 words"` all parse to `12500`. Returns `None` when
/// no digits remain or the value does not fit in `u64`.
pub fn parse_total_words(raw: &str) -> Option<u64> {
    let digits = NON_DIGIT_RE.replace_all(raw, "");
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Parses an ISO calendar date from a date-picker value.
///
/// # Errors
/// - Returns `InputError::InvalidDate` for non-blank text that is not `YYYY-MM-DD`.
pub fn parse_target_date(raw: &str) -> Result<Option<NaiveDate>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(Some)
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}
