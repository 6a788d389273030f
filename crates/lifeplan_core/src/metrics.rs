//! Summary metrics derived from a finished projection

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{PlanSettings, ProjectionResult};

/// Headline numbers for one projection, used by sweeps and summaries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Number of simulated months
    pub months: usize,
    pub final_net_worth: f64,
    pub final_real_net_worth: f64,
    pub peak_net_worth: f64,
    pub peak_date: Option<Date>,
    /// Net worth at the end of the first month at or past retirement age
    pub net_worth_at_retirement: Option<f64>,
    pub retirement_date: Option<Date>,
    pub insolvency_date: Option<Date>,
    pub insolvency_age: Option<i32>,
    /// Largest peak-to-trough decline as a fraction of the running peak
    pub max_drawdown: f64,
    pub total_contributions: f64,
    pub total_returns: f64,
}

impl ProjectionSummary {
    #[must_use]
    pub fn from_result(result: &ProjectionResult, settings: &PlanSettings) -> Self {
        let monthly = &result.monthly;
        let Some(last) = monthly.last() else {
            return Self::default();
        };

        let mut summary = Self {
            months: monthly.len(),
            final_net_worth: last.net_worth,
            final_real_net_worth: last.real_net_worth,
            peak_net_worth: f64::NEG_INFINITY,
            ..Self::default()
        };

        let mut running_peak = f64::NEG_INFINITY;
        for point in monthly {
            if point.net_worth > summary.peak_net_worth {
                summary.peak_net_worth = point.net_worth;
                summary.peak_date = Some(point.date);
            }

            running_peak = running_peak.max(point.net_worth);
            if running_peak > 0.0 {
                let drawdown = (running_peak - point.net_worth) / running_peak;
                summary.max_drawdown = summary.max_drawdown.max(drawdown);
            }

            if summary.retirement_date.is_none() && point.age >= settings.retirement_age {
                summary.retirement_date = Some(point.date);
                summary.net_worth_at_retirement = Some(point.net_worth);
            }

            summary.total_contributions += point.contribution;
            summary.total_returns += point.returns;
        }

        if let Some(point) = result.insolvency_point() {
            summary.insolvency_date = Some(point.date);
            summary.insolvency_age = Some(point.age);
        }

        summary
    }

    /// Whether net worth stayed positive for the whole projection
    #[must_use]
    pub fn is_solvent(&self) -> bool {
        self.insolvency_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_math::add_months;
    use crate::model::MonthlyProjectionPoint;
    use jiff::civil::date;

    fn result_from(net_worths: &[f64], insolvent_at: Option<usize>) -> ProjectionResult {
        let monthly = net_worths
            .iter()
            .enumerate()
            .map(|(i, nw)| MonthlyProjectionPoint {
                date: add_months(date(2025, 1, 1), i as i32),
                age: 64 + i as i32,
                net_worth: *nw,
                real_net_worth: *nw / 2.0,
                income: 0.0,
                expenses: 0.0,
                contribution: 10.0,
                returns: 1.0,
            })
            .collect();
        ProjectionResult {
            monthly,
            yearly: Vec::new(),
            first_month_with_zero_or_negative_net_worth: insolvent_at,
        }
    }

    #[test]
    fn test_empty_result_is_default() {
        let summary =
            ProjectionSummary::from_result(&ProjectionResult::default(), &PlanSettings::default());
        assert_eq!(summary, ProjectionSummary::default());
    }

    #[test]
    fn test_peak_drawdown_and_totals() {
        let result = result_from(&[100.0, 200.0, 150.0, 50.0, 120.0], None);
        let settings = PlanSettings {
            retirement_age: 66,
            ..PlanSettings::default()
        };
        let summary = ProjectionSummary::from_result(&result, &settings);

        assert_eq!(summary.months, 5);
        assert_eq!(summary.final_net_worth, 120.0);
        assert_eq!(summary.final_real_net_worth, 60.0);
        assert_eq!(summary.peak_net_worth, 200.0);
        assert_eq!(summary.peak_date, Some(date(2025, 2, 1)));
        assert!((summary.max_drawdown - 0.75).abs() < 1e-12);
        assert_eq!(summary.retirement_date, Some(date(2025, 3, 1)));
        assert_eq!(summary.net_worth_at_retirement, Some(150.0));
        assert_eq!(summary.total_contributions, 50.0);
        assert_eq!(summary.total_returns, 5.0);
        assert!(summary.is_solvent());
    }

    #[test]
    fn test_insolvency_is_reported() {
        let result = result_from(&[100.0, 20.0, -5.0, -30.0], Some(2));
        let summary = ProjectionSummary::from_result(&result, &PlanSettings::default());
        assert_eq!(summary.insolvency_date, Some(date(2025, 3, 1)));
        assert_eq!(summary.insolvency_age, Some(66));
        assert!(!summary.is_solvent());
    }
}
