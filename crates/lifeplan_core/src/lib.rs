//! Life and wealth projection library
//!
//! This crate provides a deterministic month-by-month projection engine for
//! personal financial plans. It supports:
//! - Income, expenses, and contribution targets with a retirement transition
//! - Per-amount inflation indexing and inflation-adjusted (real) net worth
//! - Life events (once, monthly, yearly) layered over the baseline
//! - Dated micro-plans that replace the baseline until superseded
//! - Yearly summaries and insolvency detection
//! - Memoization and one-parameter sweeps for interactive callers
//!
//! The engine performs no I/O and never reads a clock: the month the
//! projection starts from is always passed in.
//!
//! # Builder DSL
//!
//! ```ignore
//! use lifeplan_core::config::{EventBuilder, ProjectionBuilder};
//! use lifeplan_core::projection::project;
//!
//! let input = ProjectionBuilder::new()
//!     .birth_date(1995, 3, 2)
//!     .life_expectancy(90)
//!     .income(8_000.0)
//!     .expenses(5_000.0)
//!     .contribution(1_500.0)
//!     .expected_return(6.0)
//!     .inflation(5.0)
//!     .event(EventBuilder::expense("Home deposit").amount(60_000.0).on(2029, 6, 1).once())
//!     .build()?;
//!
//! let result = project(&input, jiff::civil::date(2025, 3, 1));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod cache;
pub mod date_math;
pub mod error;
pub mod metrics;
pub mod overlay;
pub mod overrides;
pub mod projection;
pub mod projection_state;
pub mod rates;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{EventBuilder, ProjectionBuilder, ProjectionInput};
pub use projection::project;
