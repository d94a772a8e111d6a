//! Recompute-on-change pace session.
//!
//! # Responsibility
//! - Hold the current goal fields as a form edits them.
//! - Rebuild the projection after every field change or clock refresh.
//!
//! # Invariants
//! - `projection()` always reflects the latest goal and the clock reading
//!   taken at the latest mutation.
//! - No state besides `goal` survives a recomputation.

use crate::input::{parse_target_date, parse_total_words, InputError};
use crate::model::goal::Goal;
use crate::model::projection::Projection;
use crate::pace::calculator::PaceCalculator;
use crate::service::clock::Clock;
use chrono::NaiveDate;

/// Single-goal session that recomputes its projection on each change.
pub struct PaceSession<C: Clock> {
    calculator: PaceCalculator,
    clock: C,
    goal: Goal,
    projection: Projection,
}

impl<C: Clock> PaceSession<C> {
    /// Creates an empty session; the projection starts empty.
    pub fn new(calculator: PaceCalculator, clock: C) -> Self {
        Self {
            calculator,
            clock,
            goal: Goal::default(),
            projection: Projection::empty(),
        }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn set_total_words(&mut self, total_words: Option<u64>) -> &Projection {
        self.goal.total_words = total_words;
        self.refresh()
    }

    /// Sets total words from raw text (non-digits are ignored).
    pub fn set_total_words_text(&mut self, raw: &str) -> &Projection {
        self.set_total_words(parse_total_words(raw))
    }

    pub fn set_target_date(&mut self, target_date: Option<NaiveDate>) -> &Projection {
        self.goal.target_date = target_date;
        self.refresh()
    }

    /// Sets the target date from date-picker text.
    ///
    /// # Errors
    /// - Returns `InputError::InvalidDate` for malformed text. The target date
    ///   is cleared and the projection recomputed (to empty) before returning.
    pub fn set_target_date_text(&mut self, raw: &str) -> Result<&Projection, InputError> {
        match parse_target_date(raw) {
            Ok(target_date) => Ok(self.set_target_date(target_date)),
            Err(err) => {
                self.set_target_date(None);
                Err(err)
            }
        }
    }

    /// Recomputes the projection against a fresh clock reading.
    pub fn refresh(&mut self) -> &Projection {
        self.projection = self.calculator.compute_goal(&self.goal, self.clock.now());
        &self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::PaceSession;
    use crate::pace::calculator::PaceCalculator;
    use crate::service::clock::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn instant(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("valid test instant")
    }

    fn session_at(raw: &str) -> PaceSession<FixedClock> {
        PaceSession::new(PaceCalculator::default(), FixedClock::new(instant(raw)))
    }

    #[test]
    fn projection_appears_once_both_fields_are_set() {
        let mut session = session_at("2026-10-18 10:00:00");
        assert!(session.set_total_words_text("1 000").is_empty());

        let projection = session
            .set_target_date_text("2026-10-28")
            .expect("valid date text");
        assert_eq!(projection.required_daily_words, Some(100));
    }

    #[test]
    fn clearing_words_clears_projection() {
        let mut session = session_at("2026-10-18 10:00:00");
        session.set_target_date(NaiveDate::from_ymd_opt(2026, 10, 28));
        session.set_total_words(Some(1_000));
        assert!(!session.projection().is_empty());

        assert!(session.set_total_words_text("").is_empty());
        assert_eq!(session.goal().total_words, None);
    }

    #[test]
    fn invalid_date_text_clears_date_and_projection() {
        let mut session = session_at("2026-10-18 10:00:00");
        session.set_total_words(Some(1_000));
        session
            .set_target_date_text("2026-10-28")
            .expect("valid date text");

        assert!(session.set_target_date_text("28/10/2026").is_err());
        assert_eq!(session.goal().target_date, None);
        assert!(session.projection().is_empty());
    }

    #[test]
    fn refresh_uses_latest_clock_reading() {
        let mut session = session_at("2026-10-18 10:00:00");
        session.set_total_words(Some(1_000));
        session.set_target_date(NaiveDate::from_ymd_opt(2026, 10, 28));
        assert_eq!(session.projection().day_span, Some(10));

        session.clock_mut().set(instant("2026-10-23 10:00:00"));
        assert_eq!(session.refresh().day_span, Some(5));
        assert_eq!(session.projection().required_daily_words, Some(200));
    }
}
