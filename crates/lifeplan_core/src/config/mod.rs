//! Projection input
//!
//! The main input type is `ProjectionInput`, which carries everything the
//! engine needs apart from the as-of date. Helper methods produce variants
//! for sweeps.
//!
//! # Builder DSL
//!
//! ```ignore
//! use lifeplan_core::config::{EventBuilder, ProjectionBuilder};
//!
//! let input = ProjectionBuilder::new()
//!     .birth_date(1990, 6, 15)
//!     .life_expectancy(90)
//!     .net_worth(25_000.0)
//!     .income(8_000.0)
//!     .expenses(5_000.0)
//!     .contribution(1_500.0)
//!     .expected_return(6.0)
//!     .inflation(3.0)
//!     .retire_at(65, 2_500.0)
//!     .event(EventBuilder::expense("New car").amount(30_000.0).on(2028, 4, 1).once())
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{LifeEvent, MicroPlan, PlanSettings, Profile};

pub mod builder;
pub mod event_builder;

pub use builder::ProjectionBuilder;
pub use event_builder::EventBuilder;

/// Complete projection input
///
/// # Conceptual Organization
///
/// - `profile`: who is projected and for how long
/// - `settings`: baseline income, spending, saving, and market assumptions
/// - `events`: dated adjustments layered on top of the baseline
/// - `micro_plans`: dated replacements of the baseline, latest wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub profile: Profile,
    #[serde(default)]
    pub settings: PlanSettings,
    #[serde(default)]
    pub events: Vec<LifeEvent>,
    #[serde(default)]
    pub micro_plans: Vec<MicroPlan>,
}

impl ProjectionInput {
    /// Create an input with default settings and no events or micro-plans
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            settings: PlanSettings::default(),
            events: Vec::new(),
            micro_plans: Vec::new(),
        }
    }

    // === Sweep Helpers ===

    /// Create a variant with a different retirement age
    #[must_use]
    pub fn with_retirement_age(&self, age: i32) -> Self {
        let mut input = self.clone();
        input.settings.retirement_age = age;
        input
    }

    /// Create a variant with a different expected yearly return (percent)
    #[must_use]
    pub fn with_expected_return(&self, percent: f64) -> Self {
        let mut input = self.clone();
        input.settings.expected_return_yearly = percent;
        input
    }

    /// Create a variant with a different yearly inflation (percent)
    #[must_use]
    pub fn with_inflation(&self, percent: f64) -> Self {
        let mut input = self.clone();
        input.settings.inflation_yearly = percent;
        input
    }

    /// Create a variant with a different monthly contribution target
    #[must_use]
    pub fn with_monthly_contribution(&self, amount: f64) -> Self {
        let mut input = self.clone();
        input.settings.monthly_contribution = amount;
        input
    }

    /// Create a variant with a different monthly retirement income
    #[must_use]
    pub fn with_retirement_income(&self, amount: f64) -> Self {
        let mut input = self.clone();
        input.settings.retirement_monthly_income = amount;
        input
    }
}
