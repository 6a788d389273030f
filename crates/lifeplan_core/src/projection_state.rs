//! Running state threaded through the monthly projection loop.

use crate::model::PlanSettings;
use crate::rates::monthly_rate;

/// The two running values of the projection plus the insolvency marker.
///
/// Advanced exactly once per simulated month by [`crate::projection`]; no
/// helper holds onto it between months.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Nominal net worth
    pub net_worth: f64,
    /// Product of `(1 + monthly inflation)` over all simulated months
    pub accumulated_inflation: f64,
    /// First month index (>= 1) with net worth at or below zero
    pub insolvent_at: Option<usize>,

    monthly_return: f64,
    monthly_inflation: f64,
}

impl ProjectionState {
    #[must_use]
    pub fn from_settings(settings: &PlanSettings) -> Self {
        Self {
            net_worth: settings.base_net_worth,
            accumulated_inflation: 1.0,
            insolvent_at: None,
            monthly_return: monthly_rate(settings.expected_return_yearly),
            monthly_inflation: monthly_rate(settings.inflation_yearly),
        }
    }

    /// Scale a base amount into this month's nominal terms.
    #[inline]
    #[must_use]
    pub fn nominal(&self, base: f64, inflate: bool) -> f64 {
        if inflate {
            base * self.accumulated_inflation
        } else {
            base
        }
    }

    /// Move one-time cash directly in or out of net worth.
    pub fn apply_one_time(&mut self, month: usize, inflow: f64, outflow: f64) {
        self.net_worth += inflow - outflow;
        self.record_insolvency(month);
    }

    /// Add this month's contribution and grow the balance. Returns the
    /// investment gain for the month.
    pub fn invest(&mut self, month: usize, contribution: f64) -> f64 {
        let pre_return = self.net_worth + contribution;
        let returns = pre_return * self.monthly_return;
        self.net_worth = pre_return + returns;
        self.record_insolvency(month);
        returns
    }

    /// Compound one month of inflation.
    pub fn inflate(&mut self) {
        self.accumulated_inflation *= 1.0 + self.monthly_inflation;
    }

    /// Net worth in start-of-projection purchasing power
    #[must_use]
    pub fn real_net_worth(&self) -> f64 {
        self.net_worth / self.accumulated_inflation
    }

    /// Month 0 is the starting balance and never counts as insolvency.
    fn record_insolvency(&mut self, month: usize) {
        if month >= 1 && self.net_worth <= 0.0 && self.insolvent_at.is_none() {
            self.insolvent_at = Some(month);
        }
    }
}
