//! Dated overrides of the monthly plan values

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::MicroPlanId;

/// "From this month forward, until superseded, use these values instead of
/// the plan settings."
///
/// Only the (year, month) of `effective_date` matters; the day is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroPlan {
    pub id: MicroPlanId,
    pub effective_date: Date,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_contribution: f64,
}
