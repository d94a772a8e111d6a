//! Core domain logic for wordpace.
//! This crate owns the pace calculation and every rule it applies.

pub mod format;
pub mod input;
pub mod logging;
pub mod model;
pub mod pace;
pub mod service;

pub use format::{
    empty_notice, format_long_date, format_word_count, group_digits, render_summary, Locale,
};
pub use input::{parse_target_date, parse_total_words, InputError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::Goal;
pub use model::projection::{PaceScenario, Projection};
pub use pace::calculator::{compute, day_span_from_instant, PaceCalculator};
pub use pace::policy::{PacePolicy, PolicyError};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::pace_session::PaceSession;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
