//! Slower/faster pace policy.
//!
//! # Responsibility
//! - Hold the percentage factors applied to the required daily rate.
//! - Load overrides from environment configuration.
//!
//! # Invariants
//! - `1 <= slower_percent <= 100 <= faster_percent <= MAX_FASTER_PERCENT`.
//! - A constructed `PacePolicy` is always valid; the calculator never re-checks it.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default slower pace: 80% of the required daily rate.
pub const DEFAULT_SLOWER_PERCENT: u32 = 80;
/// Default faster pace: 120% of the required daily rate.
pub const DEFAULT_FASTER_PERCENT: u32 = 120;
/// Upper bound for the faster pace factor.
pub const MAX_FASTER_PERCENT: u32 = 1_000;

/// Environment variable overriding the slower pace percentage.
pub const SLOWER_PERCENT_ENV: &str = "WORDPACE_SLOWER_PERCENT";
/// Environment variable overriding the faster pace percentage.
pub const FASTER_PERCENT_ENV: &str = "WORDPACE_FASTER_PERCENT";

/// Policy validation and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    SlowerOutOfRange(u32),
    FasterOutOfRange(u32),
    InvalidPercent { key: &'static str, value: String },
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlowerOutOfRange(value) => {
                write!(f, "slower percent must be within 1..=100, got {value}")
            }
            Self::FasterOutOfRange(value) => write!(
                f,
                "faster percent must be within 100..={MAX_FASTER_PERCENT}, got {value}"
            ),
            Self::InvalidPercent { key, value } => {
                write!(f, "{key} must be a whole number, got `{value}`")
            }
        }
    }
}

impl Error for PolicyError {}

/// Percentage factors for the slower and faster pace scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PacePolicy {
    slower_percent: u32,
    faster_percent: u32,
}

impl Default for PacePolicy {
    fn default() -> Self {
        Self {
            slower_percent: DEFAULT_SLOWER_PERCENT,
            faster_percent: DEFAULT_FASTER_PERCENT,
        }
    }
}

impl PacePolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    /// - `SlowerOutOfRange` when `slower_percent` is outside `1..=100`.
    /// - `FasterOutOfRange` when `faster_percent` is outside `100..=MAX_FASTER_PERCENT`.
    pub fn new(slower_percent: u32, faster_percent: u32) -> Result<Self, PolicyError> {
        if !(1..=100).contains(&slower_percent) {
            return Err(PolicyError::SlowerOutOfRange(slower_percent));
        }
        if !(100..=MAX_FASTER_PERCENT).contains(&faster_percent) {
            return Err(PolicyError::FasterOutOfRange(faster_percent));
        }
        Ok(Self {
            slower_percent,
            faster_percent,
        })
    }

    pub fn slower_percent(&self) -> u32 {
        self.slower_percent
    }

    pub fn faster_percent(&self) -> u32 {
        self.faster_percent
    }

    /// Loads a policy from `WORDPACE_SLOWER_PERCENT` / `WORDPACE_FASTER_PERCENT`.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PacePolicy::from_env`], reading values through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, PolicyError> {
        let slower = read_percent(&lookup, SLOWER_PERCENT_ENV)?.unwrap_or(DEFAULT_SLOWER_PERCENT);
        let faster = read_percent(&lookup, FASTER_PERCENT_ENV)?.unwrap_or(DEFAULT_FASTER_PERCENT);
        Self::new(slower, faster)
    }

    /// Applies the slower factor to `daily_words`, rounding up.
    pub fn slower_rate(&self, daily_words: u64) -> u64 {
        scale_up(daily_words, self.slower_percent)
    }

    /// Applies the faster factor to `daily_words`, rounding up.
    pub fn faster_rate(&self, daily_words: u64) -> u64 {
        scale_up(daily_words, self.faster_percent)
    }
}

fn read_percent(
    lookup: &impl Fn(&'static str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u32>, PolicyError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| PolicyError::InvalidPercent {
            key,
            value: trimmed.to_string(),
        })
}

/// `ceil(value * percent / 100)` in integer arithmetic.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub(crate) fn scale_up(value: u64, percent: u32) -> u64 {
    let scaled = (u128::from(value) * u128::from(percent)).div_ceil(100);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
