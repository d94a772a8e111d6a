//! Pace calculation core.
//!
//! # Responsibility
//! - Derive the required daily word rate for a goal.
//! - Derive slower/faster alternative paces and their completion dates.
//!
//! # Invariants
//! - Calculation is pure: same `(goal, now, policy)` always yields the same projection.
//! - Every rate and day span is rounded up, never down.
//! - Invalid or incomplete input maps to the empty projection, never to an error.

pub mod calculator;
pub mod policy;
