//! Integration tests for the lifeplan projection engine
//!
//! Tests are organized by topic:
//! - `basic` - Core loop mechanics: horizon, dates, ages, returns, inflation
//! - `events` - Life event effects on flows and net worth
//! - `micro_plans` - Dated overrides of the baseline plan
//! - `insolvency` - Detection of the first zero or negative month
//! - `yearly` - Yearly aggregation of projected months
//! - `builder_dsl` - Builder DSL for fluent input setup

mod builder_dsl;
mod insolvency;

use jiff::civil::{Date, date};

use crate::config::ProjectionInput;
use crate::model::{PlanSettings, Profile};

/// Start month shared by most tests
pub(crate) const AS_OF: Date = date(2025, 1, 1);

/// Someone turning 30 on the as-of date, expected to live to 90, with flat
/// income and expenses and no market or inflation effects.
pub(crate) fn flat_input() -> ProjectionInput {
    ProjectionInput {
        profile: Profile::new(date(1995, 1, 1), 90),
        settings: PlanSettings {
            base_net_worth: 0.0,
            base_monthly_income: 8_000.0,
            base_monthly_expenses: 5_000.0,
            monthly_contribution: 1_500.0,
            expected_return_yearly: 0.0,
            inflation_yearly: 0.0,
            inflate_income: false,
            inflate_expenses: false,
            inflate_retirement_income: false,
            retirement_age: 65,
            retirement_monthly_income: 2_000.0,
        },
        events: Vec::new(),
        micro_plans: Vec::new(),
    }
}
