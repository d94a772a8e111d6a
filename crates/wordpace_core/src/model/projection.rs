//! Derived pace projection.
//!
//! # Responsibility
//! - Hold the required daily rate and the slower/faster scenarios.
//! - Expose flat accessors matching the fields a form renders.
//!
//! # Invariants
//! - Either every rate field is `Some` or the projection is empty.
//! - `slower.daily_words <= required_daily_words <= faster.daily_words`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One alternative pace and the completion date it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceScenario {
    /// Words per day written in this scenario.
    pub daily_words: u64,
    /// Whole days needed at `daily_words`, rounded up.
    pub day_span: u64,
    /// `now + day_span` days. `None` only when the date is not representable.
    pub completion_date: Option<NaiveDate>,
}

/// Rate/date projection for one goal at one point in time.
///
/// The default value is the empty projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Whole days between "now" and the target date, rounded up.
    pub day_span: Option<u64>,
    /// Words per day needed to hit the target date exactly.
    pub required_daily_words: Option<u64>,
    pub slower: Option<PaceScenario>,
    pub faster: Option<PaceScenario>,
}

impl Projection {
    /// Returns the all-absent projection ("no projection yet").
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.required_daily_words.is_none()
    }

    pub fn slower_daily_words(&self) -> Option<u64> {
        self.slower.map(|scenario| scenario.daily_words)
    }

    pub fn slower_completion_date(&self) -> Option<NaiveDate> {
        self.slower.and_then(|scenario| scenario.completion_date)
    }

    pub fn faster_daily_words(&self) -> Option<u64> {
        self.faster.map(|scenario| scenario.daily_words)
    }

    pub fn faster_completion_date(&self) -> Option<NaiveDate> {
        self.faster.and_then(|scenario| scenario.completion_date)
    }
}
