//! Goal and projection model for pace calculations.
//!
//! # Responsibility
//! - Define the transient input (`Goal`) supplied by presentation layers.
//! - Define the derived output (`Projection`) produced by the calculator.
//!
//! # Invariants
//! - `Projection` is always rebuilt from `(Goal, now)`, never patched.
//! - An all-absent `Projection` means "not enough input", not a failure.

pub mod goal;
pub mod projection;
