//! Projection output types

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One simulated month, values at the end of the month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjectionPoint {
    /// First day of the simulated month
    pub date: Date,
    pub age: i32,
    /// Nominal net worth
    pub net_worth: f64,
    /// Net worth deflated by accumulated inflation (today's purchasing power)
    pub real_net_worth: f64,
    pub income: f64,
    pub expenses: f64,
    /// Amount actually invested this month
    pub contribution: f64,
    /// Investment gain this month
    pub returns: f64,
}

/// One calendar year touched by the monthly series.
///
/// See [`crate::aggregate::aggregate_yearly`] for how the flow fields are
/// accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyProjectionPoint {
    pub year: i16,
    pub age: i32,
    pub net_worth: f64,
    pub real_net_worth: f64,
    pub income: f64,
    pub expenses: f64,
    pub contribution: f64,
    pub returns: f64,
}

/// Complete output of one projection run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub monthly: Vec<MonthlyProjectionPoint>,
    pub yearly: Vec<YearlyProjectionPoint>,
    /// Index into `monthly` of the first month (after month 0) whose net
    /// worth reached zero or below
    pub first_month_with_zero_or_negative_net_worth: Option<usize>,
}

impl ProjectionResult {
    /// The month at which net worth first hit zero or below, if it did.
    #[must_use]
    pub fn insolvency_point(&self) -> Option<&MonthlyProjectionPoint> {
        self.first_month_with_zero_or_negative_net_worth
            .and_then(|i| self.monthly.get(i))
    }

    /// Nominal net worth at the end of the last simulated month
    #[must_use]
    pub fn final_net_worth(&self) -> Option<f64> {
        self.monthly.last().map(|p| p.net_worth)
    }

    /// Get the yearly row for a calendar year
    #[must_use]
    pub fn year(&self, year: i16) -> Option<&YearlyProjectionPoint> {
        self.yearly
            .binary_search_by_key(&year, |p| p.year)
            .ok()
            .map(|i| &self.yearly[i])
    }
}
