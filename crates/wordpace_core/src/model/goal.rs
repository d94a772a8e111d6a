//! Writing goal input model.
//!
//! # Responsibility
//! - Carry the two user-editable fields that drive a projection.
//!
//! # Invariants
//! - `total_words` is never negative; boundary layers map negative input to `None`.
//! - A goal with either field absent is valid, it just projects to nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transient writing goal, recomputed whenever a field changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Total words to write. `Some(0)` is kept as-is and projects to empty.
    pub total_words: Option<u64>,
    /// Calendar day the goal should be reached by.
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(total_words: Option<u64>, target_date: Option<NaiveDate>) -> Self {
        Self {
            total_words,
            target_date,
        }
    }

    /// Returns whether both fields carry a usable value.
    ///
    /// A complete goal can still project to empty when the target date is
    /// not after "now".
    pub fn is_complete(&self) -> bool {
        matches!(self.total_words, Some(words) if words > 0) && self.target_date.is_some()
    }
}
