//! Projection Builder
//!
//! The ProjectionBuilder provides a fluent API for creating a
//! [`ProjectionInput`] with automatic ID assignment.
//!
//! # Example
//!
//! ```ignore
//! use lifeplan_core::config::{EventBuilder, ProjectionBuilder};
//!
//! let input = ProjectionBuilder::new()
//!     .birth_date(1990, 6, 15)
//!     .life_expectancy(90)
//!     .income(8_000.0)
//!     .expenses(5_000.0)
//!     .contribution(1_500.0)
//!     .expected_return(6.0)
//!     .inflation(5.0)
//!
//!     // A sabbatical year with no income
//!     .micro_plan(jiff::civil::date(2027, 1, 1), 0.0, 4_000.0, 0.0)
//!     .micro_plan(jiff::civil::date(2028, 1, 1), 8_500.0, 5_000.0, 1_500.0)
//!
//!     .event(EventBuilder::expense("Wedding").amount(25_000.0).on(2026, 6, 1).once())
//!     .build()?;
//! ```

use jiff::civil::Date;

use super::ProjectionInput;
use super::event_builder::{DateSpec, EventBuilder};
use crate::error::BuildError;
use crate::model::{EventId, MicroPlan, MicroPlanId, PlanSettings, Profile};

/// Builder for creating projection inputs with automatic ID assignment
#[derive(Debug, Clone)]
pub struct ProjectionBuilder {
    birth_date: Option<DateSpec>,
    life_expectancy_years: i32,
    settings: PlanSettings,
    pending_events: Vec<EventBuilder>,
    micro_plans: Vec<MicroPlan>,
    next_micro_plan_id: u32,
}

impl Default for ProjectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionBuilder {
    /// Create a new projection builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            birth_date: None,
            life_expectancy_years: 90,
            settings: PlanSettings::default(),
            pending_events: Vec::new(),
            micro_plans: Vec::new(),
            next_micro_plan_id: 0,
        }
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Set the birth date (convenience method)
    #[must_use]
    pub fn birth_date(mut self, year: i16, month: i8, day: i8) -> Self {
        self.birth_date = Some(DateSpec::Ymd(year, month, day));
        self
    }

    /// Set the birth date using a Date object
    #[must_use]
    pub fn birth_date_obj(mut self, date: Date) -> Self {
        self.birth_date = Some(DateSpec::Date(date));
        self
    }

    #[must_use]
    pub fn life_expectancy(mut self, years: i32) -> Self {
        self.life_expectancy_years = years;
        self
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Replace all settings at once
    #[must_use]
    pub fn settings(mut self, settings: PlanSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn net_worth(mut self, amount: f64) -> Self {
        self.settings.base_net_worth = amount;
        self
    }

    #[must_use]
    pub fn income(mut self, monthly: f64) -> Self {
        self.settings.base_monthly_income = monthly;
        self
    }

    #[must_use]
    pub fn expenses(mut self, monthly: f64) -> Self {
        self.settings.base_monthly_expenses = monthly;
        self
    }

    #[must_use]
    pub fn contribution(mut self, monthly: f64) -> Self {
        self.settings.monthly_contribution = monthly;
        self
    }

    /// Expected yearly return in percent
    #[must_use]
    pub fn expected_return(mut self, percent: f64) -> Self {
        self.settings.expected_return_yearly = percent;
        self
    }

    /// Yearly inflation in percent
    #[must_use]
    pub fn inflation(mut self, percent: f64) -> Self {
        self.settings.inflation_yearly = percent;
        self
    }

    /// Set which amounts follow inflation: working income, expenses,
    /// retirement income
    #[must_use]
    pub fn inflate(mut self, income: bool, expenses: bool, retirement_income: bool) -> Self {
        self.settings.inflate_income = income;
        self.settings.inflate_expenses = expenses;
        self.settings.inflate_retirement_income = retirement_income;
        self
    }

    /// Retirement age and the monthly income received from then on
    #[must_use]
    pub fn retire_at(mut self, age: i32, monthly_income: f64) -> Self {
        self.settings.retirement_age = age;
        self.settings.retirement_monthly_income = monthly_income;
        self
    }

    // =========================================================================
    // Events and micro-plans
    // =========================================================================

    #[must_use]
    pub fn event(mut self, event: EventBuilder) -> Self {
        self.pending_events.push(event);
        self
    }

    /// Override income, expenses, and contribution from `effective_date` on
    #[must_use]
    pub fn micro_plan(
        mut self,
        effective_date: Date,
        monthly_income: f64,
        monthly_expenses: f64,
        monthly_contribution: f64,
    ) -> Self {
        let id = MicroPlanId(self.next_micro_plan_id);
        self.next_micro_plan_id += 1;
        self.micro_plans.push(MicroPlan {
            id,
            effective_date,
            monthly_income,
            monthly_expenses,
            monthly_contribution,
        });
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Resolve dates and assign event IDs in insertion order.
    pub fn build(self) -> Result<ProjectionInput, BuildError> {
        let birth_date = self
            .birth_date
            .ok_or(BuildError::MissingBirthDate)?
            .resolve()?;

        let events = self
            .pending_events
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.build(EventId(i as u32)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProjectionInput {
            profile: Profile::new(birth_date, self.life_expectancy_years),
            settings: self.settings,
            events,
            micro_plans: self.micro_plans,
        })
    }
}
