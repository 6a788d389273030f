//! Per-month life event overlay
//!
//! Each event is checked against the current month on its own and the
//! contributions are summed. The overlay never looks at other months, so the
//! order of the event list is irrelevant.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::month_ordinal;
use crate::model::{Frequency, LifeEvent};

/// Income and expense adjustments for a single month.
///
/// `income` and `expenses` start at the nominal base values and absorb
/// monthly events; `extra_*` collect once and yearly events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthOverlay {
    pub income: f64,
    pub expenses: f64,
    pub extra_income: f64,
    pub extra_expenses: f64,
    /// Cash leaving net worth directly, outside the income/expense flow
    pub one_time_outflow: f64,
    /// Part of the overlay contract; no event rule produces it.
    pub one_time_inflow: f64,
}

impl MonthOverlay {
    /// Income for the month after all events
    #[must_use]
    pub fn total_income(&self) -> f64 {
        self.income + self.extra_income
    }

    /// Expenses for the month after all events
    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.expenses + self.extra_expenses
    }
}

/// Whether `month` falls inside the event's `[date, end_date]` window.
/// Events without an end date are never cut off here.
fn within_window(event: &LifeEvent, month: i32) -> bool {
    match event.end_date {
        Some(end) => month >= month_ordinal(event.date) && month <= month_ordinal(end),
        None => true,
    }
}

/// Apply every event active in `current` on top of the base income and
/// expenses for that month.
///
/// A `once` expense lands in both `extra_expenses` and `one_time_outflow`,
/// so it reduces the month's investable surplus and is also taken straight
/// out of net worth.
#[must_use]
pub fn apply_events(
    base_income: f64,
    base_expenses: f64,
    current: Date,
    events: &[LifeEvent],
) -> MonthOverlay {
    let month = month_ordinal(current);
    let mut overlay = MonthOverlay {
        income: base_income,
        expenses: base_expenses,
        ..MonthOverlay::default()
    };

    for event in events {
        if !within_window(event, month) {
            continue;
        }

        let start = month_ordinal(event.date);
        let is_contribution = event.kind.is_contribution();

        match event.frequency {
            Frequency::Once => {
                if month != start {
                    continue;
                }
                if is_contribution {
                    overlay.extra_income += event.amount;
                } else {
                    overlay.extra_expenses += event.amount.abs();
                    overlay.one_time_outflow += event.amount.abs();
                }
            }
            Frequency::Monthly => {
                if month < start {
                    continue;
                }
                if is_contribution {
                    overlay.income += event.amount;
                } else {
                    overlay.expenses += event.amount.abs();
                }
            }
            Frequency::Yearly => {
                if current.month() != event.date.month() || current.year() < event.date.year() {
                    continue;
                }
                if is_contribution {
                    overlay.extra_income += event.amount;
                } else {
                    overlay.extra_expenses += event.amount.abs();
                }
            }
        }
    }

    overlay
}
