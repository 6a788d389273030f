//! One-parameter sweeps with parallel evaluation
//!
//! A sweep re-runs the projection once per value of a single plan parameter
//! and reports a [`ProjectionSummary`] for each. Points are independent, so
//! with the `parallel` feature they are evaluated on the rayon pool.

use jiff::civil::Date;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ProjectionInput;
use crate::error::SweepError;
use crate::metrics::ProjectionSummary;
use crate::projection::project;

/// The plan parameter varied by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SweepParameter {
    /// Retirement age in years; values are rounded to the nearest year
    RetirementAge,
    /// Expected yearly return in percent
    ExpectedReturn,
    /// Yearly inflation in percent
    InflationRate,
    /// Monthly contribution target
    MonthlyContribution,
    /// Monthly income after retirement
    RetirementIncome,
}

impl SweepParameter {
    /// Get a display label for the parameter
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::RetirementAge => "Retirement Age",
            Self::ExpectedReturn => "Expected Return %",
            Self::InflationRate => "Inflation %",
            Self::MonthlyContribution => "Monthly Contribution",
            Self::RetirementIncome => "Retirement Income",
        }
    }

    /// Create the input variant for one sweep value
    #[must_use]
    pub fn apply(&self, input: &ProjectionInput, value: f64) -> ProjectionInput {
        match self {
            Self::RetirementAge => input.with_retirement_age(value.round() as i32),
            Self::ExpectedReturn => input.with_expected_return(value),
            Self::InflationRate => input.with_inflation(value),
            Self::MonthlyContribution => input.with_monthly_contribution(value),
            Self::RetirementIncome => input.with_retirement_income(value),
        }
    }
}

/// Result for a single sweep value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub value: f64,
    pub summary: ProjectionSummary,
}

fn evaluate(
    input: &ProjectionInput,
    as_of: Date,
    parameter: SweepParameter,
    value: f64,
) -> SweepPoint {
    let variant = parameter.apply(input, value);
    let result = project(&variant, as_of);
    SweepPoint {
        value,
        summary: ProjectionSummary::from_result(&result, &variant.settings),
    }
}

/// Evaluate the projection for each value, returning points in input order.
pub fn sweep(
    input: &ProjectionInput,
    as_of: Date,
    parameter: SweepParameter,
    values: &[f64],
) -> Result<Vec<SweepPoint>, SweepError> {
    if values.is_empty() {
        return Err(SweepError::NoValues);
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(SweepError::NonFiniteValue(*bad));
    }

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = values
        .par_iter()
        .map(|&value| evaluate(input, as_of, parameter, value))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = values
        .iter()
        .map(|&value| evaluate(input, as_of, parameter, value))
        .collect();

    Ok(points)
}

/// Generate `steps` evenly spaced values from `min` to `max` inclusive.
///
/// One step yields the midpoint; zero steps yield nothing.
#[must_use]
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![(min + max) / 2.0],
        _ => (0..steps)
            .map(|i| min + (max - min) * (i as f64) / (steps - 1) as f64)
            .collect(),
    }
}
