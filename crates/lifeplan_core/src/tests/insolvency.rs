//! Tests for insolvency detection
//!
//! The first month after month 0 whose net worth is zero or below is
//! reported, whether it got there through a one-time outflow or after
//! returns were applied.

use jiff::civil::date;

use super::{AS_OF, flat_input};
use crate::config::EventBuilder;
use crate::model::EventId;
use crate::projection::project;

#[test]
fn test_healthy_plan_is_never_insolvent() {
    let result = project(&flat_input(), AS_OF);
    assert!(result.first_month_with_zero_or_negative_net_worth.is_none());
    assert!(result.insolvency_point().is_none());
}

#[test]
fn test_large_once_expense_triggers_insolvency() {
    let mut input = flat_input();
    input.settings.base_net_worth = 1_000.0;
    input.events.push(
        EventBuilder::expense("Surgery")
            .amount(50_000.0)
            .on(2025, 4, 1)
            .once()
            .build(EventId(0))
            .unwrap(),
    );
    let result = project(&input, AS_OF);

    assert_eq!(result.first_month_with_zero_or_negative_net_worth, Some(3));
    let point = result.insolvency_point().unwrap();
    assert_eq!(point.date, date(2025, 4, 1));
    assert!(point.net_worth < 0.0);
}

#[test]
fn test_negative_start_is_not_insolvency_at_month_zero() {
    let mut input = flat_input();
    input.settings.base_net_worth = -10_000.0;
    let result = project(&input, AS_OF);

    assert!(result.monthly[0].net_worth < 0.0);
    assert_eq!(result.first_month_with_zero_or_negative_net_worth, Some(1));
}

#[test]
fn test_exactly_zero_counts_as_insolvent() {
    let mut input = flat_input();
    input.settings.base_net_worth = 0.0;
    input.settings.monthly_contribution = 0.0;
    let result = project(&input, AS_OF);
    assert_eq!(result.monthly[1].net_worth, 0.0);
    assert_eq!(result.first_month_with_zero_or_negative_net_worth, Some(1));
}

#[test]
fn test_only_first_insolvency_is_recorded() {
    let mut input = flat_input();
    input.settings.base_net_worth = 2_000.0;
    input.events.push(
        EventBuilder::expense("Emergency")
            .amount(5_000.0)
            .on(2025, 3, 1)
            .once()
            .build(EventId(0))
            .unwrap(),
    );
    input.events.push(
        EventBuilder::expense("Another")
            .amount(100_000.0)
            .on(2026, 3, 1)
            .once()
            .build(EventId(1))
            .unwrap(),
    );
    let result = project(&input, AS_OF);

    // 2000 + 1500 + 1500 - 5000 = 0 after the outflow in month 2, and the
    // expense leaves no surplus to invest that month
    assert_eq!(result.first_month_with_zero_or_negative_net_worth, Some(2));
    assert_eq!(result.monthly[2].net_worth, 0.0);
    assert!(result.monthly[14].net_worth < 0.0);
}
