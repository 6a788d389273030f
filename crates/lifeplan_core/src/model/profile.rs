//! Who is being projected and under which baseline assumptions.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// The person whose life is being projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub birth_date: Date,
    /// The projection ends at `birth_date + life_expectancy_years`
    pub life_expectancy_years: i32,
}

impl Profile {
    #[must_use]
    pub fn new(birth_date: Date, life_expectancy_years: i32) -> Self {
        Self {
            birth_date,
            life_expectancy_years,
        }
    }

    /// The date the projection horizon ends on.
    #[must_use]
    pub fn end_of_life(&self) -> Date {
        crate::date_math::add_years(self.birth_date, self.life_expectancy_years)
    }
}

/// Baseline plan assumptions for one projection run.
///
/// Currency fields share one unit with no rounding. Rates are plain
/// percentages: `6.0` means 6% per year. Missing fields deserialize to the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    pub base_net_worth: f64,
    pub base_monthly_income: f64,
    pub base_monthly_expenses: f64,
    /// Target amount invested each month, capped by what is left after expenses
    pub monthly_contribution: f64,

    pub expected_return_yearly: f64,
    pub inflation_yearly: f64,

    /// Scale working-life income by accumulated inflation
    pub inflate_income: bool,
    /// Scale expenses by accumulated inflation at every age
    pub inflate_expenses: bool,
    /// Scale retirement income by accumulated inflation
    pub inflate_retirement_income: bool,

    pub retirement_age: i32,
    pub retirement_monthly_income: f64,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            base_net_worth: 0.0,
            base_monthly_income: 0.0,
            base_monthly_expenses: 0.0,
            monthly_contribution: 0.0,
            expected_return_yearly: 0.0,
            inflation_yearly: 0.0,
            inflate_income: false,
            inflate_expenses: true,
            inflate_retirement_income: false,
            retirement_age: 65,
            retirement_monthly_income: 0.0,
        }
    }
}
