//! The monthly projection loop
//!
//! Walks calendar months from the as-of month to the end of life expectancy,
//! one [`MonthlyProjectionPoint`] per month. Everything the loop reads is in
//! the [`ProjectionInput`] or the explicit `as_of` date; it never consults a
//! clock.

use jiff::civil::Date;

use crate::aggregate::aggregate_yearly;
use crate::config::ProjectionInput;
use crate::date_math::{add_months, age_at, first_of_month, months_between};
use crate::model::{MicroPlan, MonthlyProjectionPoint, PlanSettings, ProjectionResult};
use crate::overlay::apply_events;
use crate::overrides::{active_in_sorted, sort_micro_plans};
use crate::projection_state::ProjectionState;

/// Base values for one month before inflation and events
#[derive(Debug, Clone, Copy, PartialEq)]
struct MonthBase {
    income: f64,
    expenses: f64,
    contribution: f64,
    inflate_income: bool,
}

impl MonthBase {
    /// An active micro-plan wins at every age. Without one, income switches
    /// to retirement income at `retirement_age`.
    fn resolve(settings: &PlanSettings, plan: Option<&MicroPlan>, age: i32) -> Self {
        let working = age < settings.retirement_age;
        let inflate_income = if working {
            settings.inflate_income
        } else {
            settings.inflate_retirement_income
        };

        match plan {
            Some(plan) => Self {
                income: plan.monthly_income,
                expenses: plan.monthly_expenses,
                contribution: plan.monthly_contribution,
                inflate_income,
            },
            None => Self {
                income: if working {
                    settings.base_monthly_income
                } else {
                    settings.retirement_monthly_income
                },
                expenses: settings.base_monthly_expenses,
                contribution: settings.monthly_contribution,
                inflate_income,
            },
        }
    }
}

/// Number of months after the as-of month that the projection covers.
///
/// Zero when life expectancy is already behind `as_of`, which still yields a
/// single-point series.
#[must_use]
pub fn total_months(input: &ProjectionInput, as_of: Date) -> usize {
    months_between(as_of, input.profile.end_of_life()).max(0) as usize
}

/// Run the monthly loop. Returns the series and the first insolvent month.
#[must_use]
pub fn project_monthly(
    input: &ProjectionInput,
    as_of: Date,
) -> (Vec<MonthlyProjectionPoint>, Option<usize>) {
    let settings = &input.settings;
    let birth_date = input.profile.birth_date;
    let start = first_of_month(as_of);
    let months = total_months(input, as_of);
    let micro_plans = sort_micro_plans(&input.micro_plans);

    let mut state = ProjectionState::from_settings(settings);
    let mut points = Vec::with_capacity(months + 1);

    for i in 0..=months {
        let date = add_months(start, i as i32);
        let age = age_at(birth_date, date);

        let base = MonthBase::resolve(settings, active_in_sorted(&micro_plans, date), age);
        let nominal_income = state.nominal(base.income, base.inflate_income);
        let nominal_expenses = state.nominal(base.expenses, settings.inflate_expenses);

        let overlay = apply_events(nominal_income, nominal_expenses, date, &input.events);
        let income = overlay.total_income();
        let expenses = overlay.total_expenses();

        let available = (income - expenses).max(0.0);
        let contribution = base.contribution.min(available);

        state.apply_one_time(i, overlay.one_time_inflow, overlay.one_time_outflow);
        let returns = state.invest(i, contribution);
        state.inflate();

        points.push(MonthlyProjectionPoint {
            date,
            age,
            net_worth: state.net_worth,
            real_net_worth: state.real_net_worth(),
            income,
            expenses,
            contribution,
            returns,
        });
    }

    (points, state.insolvent_at)
}

/// Project a plan month by month and summarize it by calendar year.
///
/// `as_of` anchors month 0 (the first of its month). The function is pure:
/// the same input and date always give the same result.
#[must_use]
pub fn project(input: &ProjectionInput, as_of: Date) -> ProjectionResult {
    let (monthly, insolvent_at) = project_monthly(input, as_of);
    let yearly = aggregate_yearly(&monthly);

    ProjectionResult {
        monthly,
        yearly,
        first_month_with_zero_or_negative_net_worth: insolvent_at,
    }
}
