//! Micro-plan resolution
//!
//! A micro-plan replaces the plan's income, expenses, and contribution from
//! its effective month until a later micro-plan takes over.

use jiff::civil::Date;

use crate::date_math::month_ordinal;
use crate::model::MicroPlan;

/// Sort micro-plans ascending by effective date.
///
/// The sort is stable, so plans sharing a date keep their list order.
#[must_use]
pub fn sort_micro_plans(plans: &[MicroPlan]) -> Vec<&MicroPlan> {
    let mut sorted: Vec<&MicroPlan> = plans.iter().collect();
    sorted.sort_by_key(|p| p.effective_date);
    sorted
}

/// Find the plan in effect for `target` in an already sorted slice.
///
/// Returns the last plan whose (year, month) is at or before the target's.
/// Among plans effective in the same month the later list entry wins.
#[must_use]
pub fn active_in_sorted<'a>(sorted: &[&'a MicroPlan], target: Date) -> Option<&'a MicroPlan> {
    let target = month_ordinal(target);
    let mut active = None;
    for plan in sorted {
        if month_ordinal(plan.effective_date) <= target {
            active = Some(*plan);
        }
    }
    active
}

/// Find the micro-plan in effect for `target`, or `None` if none has started.
#[must_use]
pub fn active_micro_plan(plans: &[MicroPlan], target: Date) -> Option<&MicroPlan> {
    active_in_sorted(&sort_micro_plans(plans), target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MicroPlanId;
    use jiff::civil::date;

    fn plan(id: u32, effective_date: Date, income: f64) -> MicroPlan {
        MicroPlan {
            id: MicroPlanId(id),
            effective_date,
            monthly_income: income,
            monthly_expenses: 0.0,
            monthly_contribution: 0.0,
        }
    }

    #[test]
    fn test_empty_list_has_no_active_plan() {
        assert!(active_micro_plan(&[], date(2025, 1, 1)).is_none());
    }

    #[test]
    fn test_future_plan_is_not_active() {
        let plans = [plan(1, date(2026, 1, 1), 100.0)];
        assert!(active_micro_plan(&plans, date(2025, 12, 1)).is_none());
    }

    #[test]
    fn test_latest_started_plan_wins_regardless_of_input_order() {
        let plans = [
            plan(1, date(2027, 1, 1), 300.0),
            plan(2, date(2025, 1, 1), 100.0),
            plan(3, date(2026, 1, 1), 200.0),
        ];
        let active = active_micro_plan(&plans, date(2026, 6, 1)).unwrap();
        assert_eq!(active.id, MicroPlanId(3));
        let active = active_micro_plan(&plans, date(2030, 1, 1)).unwrap();
        assert_eq!(active.id, MicroPlanId(1));
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        // Effective late in the month still counts for the first of that month
        let plans = [plan(1, date(2025, 3, 28), 100.0)];
        assert!(active_micro_plan(&plans, date(2025, 3, 1)).is_some());
        assert!(active_micro_plan(&plans, date(2025, 2, 28)).is_none());
    }

    #[test]
    fn test_same_date_tie_goes_to_later_entry() {
        let plans = [
            plan(1, date(2025, 3, 1), 100.0),
            plan(2, date(2025, 3, 1), 200.0),
        ];
        let active = active_micro_plan(&plans, date(2025, 3, 1)).unwrap();
        assert_eq!(active.id, MicroPlanId(2));
    }

    #[test]
    fn test_same_month_different_days_later_date_wins() {
        // Sorted by full date first, so the later day is scanned last
        let plans = [
            plan(1, date(2025, 3, 20), 100.0),
            plan(2, date(2025, 3, 5), 200.0),
        ];
        let active = active_micro_plan(&plans, date(2025, 3, 1)).unwrap();
        assert_eq!(active.id, MicroPlanId(1));
    }
}
