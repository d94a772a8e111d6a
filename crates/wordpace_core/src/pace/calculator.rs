//! Pace calculator.
//!
//! # Responsibility
//! - Turn `(total_words, target_date, now)` into a `Projection`.
//! - Keep date arithmetic at whole-day granularity.
//!
//! # Invariants
//! - Zero/absent words, an absent date or a non-positive day span yield `Projection::empty()`.
//! - `required_daily_words >= 1` whenever the projection is non-empty.
//! - Completion dates are counted from `now`, not from the target date.

use crate::model::goal::Goal;
use crate::model::projection::{PaceScenario, Projection};
use crate::pace::policy::PacePolicy;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1_000;

/// Pace calculator bound to one slower/faster policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaceCalculator {
    policy: PacePolicy,
}

impl PaceCalculator {
    pub fn new(policy: PacePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PacePolicy {
        self.policy
    }

    /// Computes a projection using calendar-day "now".
    ///
    /// The day span is the plain calendar difference `target_date - now`.
    pub fn compute(
        &self,
        total_words: Option<u64>,
        target_date: Option<NaiveDate>,
        now: NaiveDate,
    ) -> Projection {
        let (Some(total_words), Some(target_date)) = (total_words, target_date) else {
            debug!("event=pace_projection module=pace status=skipped reason=incomplete_goal");
            return Projection::empty();
        };
        let day_span = target_date.signed_duration_since(now).num_days();
        self.project(total_words, day_span, now)
    }

    /// Computes a projection using a wall-clock instant as "now".
    ///
    /// The span runs from `now` to the start of `target_date`; any fractional
    /// day is rounded up to a whole day of work.
    pub fn compute_at(
        &self,
        total_words: Option<u64>,
        target_date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Projection {
        let (Some(total_words), Some(target_date)) = (total_words, target_date) else {
            debug!("event=pace_projection module=pace status=skipped reason=incomplete_goal");
            return Projection::empty();
        };
        let day_span = day_span_from_instant(now, target_date);
        self.project(total_words, day_span, now.date())
    }

    /// Computes a projection for a `Goal` using a wall-clock instant as "now".
    ///
    /// Incomplete goals return the empty projection without touching dates.
    pub fn compute_goal(&self, goal: &Goal, now: NaiveDateTime) -> Projection {
        if !goal.is_complete() {
            debug!("event=pace_projection module=pace status=skipped reason=incomplete_goal");
            return Projection::empty();
        }
        self.compute_at(goal.total_words, goal.target_date, now)
    }

    fn project(&self, total_words: u64, day_span: i64, today: NaiveDate) -> Projection {
        if total_words == 0 {
            debug!("event=pace_projection module=pace status=skipped reason=no_words");
            return Projection::empty();
        }
        if day_span <= 0 {
            debug!(
                "event=pace_projection module=pace status=skipped reason=target_not_ahead day_span={day_span}"
            );
            return Projection::empty();
        }

        let day_span = day_span.unsigned_abs();
        let required = total_words.div_ceil(day_span);
        let slower = scenario(total_words, self.policy.slower_rate(required), today);
        let faster = scenario(total_words, self.policy.faster_rate(required), today);

        debug!(
            "event=pace_projection module=pace status=ok day_span={} required={} slower={} faster={}",
            day_span, required, slower.daily_words, faster.daily_words
        );

        Projection {
            day_span: Some(day_span),
            required_daily_words: Some(required),
            slower: Some(slower),
            faster: Some(faster),
        }
    }
}

/// Computes a projection with the default 80% / 120% policy.
///
/// Shorthand for `PaceCalculator::default().compute(..)`.
pub fn compute(
    total_words: Option<u64>,
    target_date: Option<NaiveDate>,
    now: NaiveDate,
) -> Projection {
    PaceCalculator::default().compute(total_words, target_date, now)
}

/// Whole days from `now` to midnight starting `target_date`, rounded up.
pub fn day_span_from_instant(now: NaiveDateTime, target_date: NaiveDate) -> i64 {
    let target_start = target_date.and_time(NaiveTime::MIN);
    let millis = target_start.signed_duration_since(now).num_milliseconds();
    let whole_days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        whole_days + 1
    } else {
        whole_days
    }
}

fn scenario(total_words: u64, daily_words: u64, today: NaiveDate) -> PaceScenario {
    // daily_words >= 1 because the required rate is >= 1 and factors are >= 1%.
    let day_span = total_words.div_ceil(daily_words);
    PaceScenario {
        daily_words,
        day_span,
        completion_date: today.checked_add_days(Days::new(day_span)),
    }
}
