//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate goal edits into projection recomputation.
//! - Keep UI/FFI layers decoupled from the calculator and the time source.

pub mod clock;
pub mod pace_session;
