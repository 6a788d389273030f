//! Tests for the Builder DSL
//!
//! These tests demonstrate and verify the fluent builder API for creating
//! projection inputs.

use jiff::civil::date;

use crate::config::{EventBuilder, ProjectionBuilder};
use crate::error::BuildError;
use crate::model::{EventId, EventKind, Frequency, MicroPlanId};
use crate::projection::project;

/// Test basic ProjectionBuilder usage
#[test]
fn test_projection_builder_basic() {
    let input = ProjectionBuilder::new()
        .birth_date(1990, 6, 15)
        .life_expectancy(85)
        .net_worth(20_000.0)
        .income(6_000.0)
        .expenses(4_000.0)
        .contribution(1_000.0)
        .expected_return(5.0)
        .inflation(2.0)
        .inflate(true, true, false)
        .retire_at(62, 1_800.0)
        .build()
        .unwrap();

    assert_eq!(input.profile.birth_date, date(1990, 6, 15));
    assert_eq!(input.profile.life_expectancy_years, 85);
    assert_eq!(input.settings.base_net_worth, 20_000.0);
    assert_eq!(input.settings.base_monthly_income, 6_000.0);
    assert_eq!(input.settings.base_monthly_expenses, 4_000.0);
    assert_eq!(input.settings.monthly_contribution, 1_000.0);
    assert_eq!(input.settings.expected_return_yearly, 5.0);
    assert_eq!(input.settings.inflation_yearly, 2.0);
    assert!(input.settings.inflate_income);
    assert!(input.settings.inflate_expenses);
    assert!(!input.settings.inflate_retirement_income);
    assert_eq!(input.settings.retirement_age, 62);
    assert_eq!(input.settings.retirement_monthly_income, 1_800.0);
    assert!(input.events.is_empty());
    assert!(input.micro_plans.is_empty());
}

#[test]
fn test_builder_requires_birth_date() {
    let err = ProjectionBuilder::new().income(1_000.0).build().unwrap_err();
    assert_eq!(err, BuildError::MissingBirthDate);
}

#[test]
fn test_builder_rejects_invalid_dates() {
    let err = ProjectionBuilder::new()
        .birth_date(1990, 2, 30)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::InvalidDate {
            year: 1990,
            month: 2,
            day: 30
        }
    );

    let err = ProjectionBuilder::new()
        .birth_date(1990, 1, 1)
        .event(EventBuilder::expense("Undated").amount(10.0))
        .build()
        .unwrap_err();
    assert_eq!(err, BuildError::EventMissingDate("Undated".to_string()));
}

#[test]
fn test_event_builder_assigns_ids_and_fields() {
    let input = ProjectionBuilder::new()
        .birth_date_obj(date(1990, 1, 1))
        .event(
            EventBuilder::expense("Daycare")
                .amount(1_200.0)
                .on(2026, 9, 1)
                .monthly()
                .until(date(2029, 8, 31))
                .duration_months(36),
        )
        .event(
            EventBuilder::contribution("Bonus")
                .amount(5_000.0)
                .on_date(date(2026, 3, 1))
                .yearly()
                .inflation_indexed(),
        )
        .event(EventBuilder::tagged("Roof", "home").amount(-15_000.0).on(2030, 5, 1))
        .build()
        .unwrap();

    assert_eq!(input.events.len(), 3);
    let daycare = &input.events[0];
    assert_eq!(daycare.id, EventId(0));
    assert_eq!(daycare.frequency, Frequency::Monthly);
    assert_eq!(daycare.end_date, Some(date(2029, 8, 31)));
    assert_eq!(daycare.duration_months, Some(36));
    assert!(!daycare.kind.is_contribution());

    let bonus = &input.events[1];
    assert_eq!(bonus.id, EventId(1));
    assert_eq!(bonus.kind, EventKind::Contribution);
    assert!(bonus.inflation_indexed);

    let roof = &input.events[2];
    assert_eq!(roof.kind.as_str(), "home");
    assert_eq!(roof.frequency, Frequency::Once);
    assert_eq!(roof.amount, -15_000.0);
}

#[test]
fn test_micro_plans_get_sequential_ids() {
    let input = ProjectionBuilder::new()
        .birth_date(1990, 1, 1)
        .micro_plan(date(2027, 1, 1), 0.0, 3_000.0, 0.0)
        .micro_plan(date(2028, 1, 1), 9_000.0, 5_000.0, 2_000.0)
        .build()
        .unwrap();
    let ids: Vec<MicroPlanId> = input.micro_plans.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![MicroPlanId(0), MicroPlanId(1)]);
}

#[test]
fn test_built_input_projects() {
    let input = ProjectionBuilder::new()
        .birth_date(1995, 1, 1)
        .life_expectancy(90)
        .income(8_000.0)
        .expenses(5_000.0)
        .contribution(1_500.0)
        .expected_return(6.0)
        .inflation(5.0)
        .inflate(false, false, false)
        .micro_plan(date(2026, 1, 1), 0.0, 4_000.0, 0.0)
        .event(EventBuilder::expense("Wedding").amount(5_000.0).on(2025, 6, 1).once())
        .build()
        .unwrap();

    let result = project(&input, date(2025, 1, 1));
    assert_eq!(result.monthly.len(), 721);
    assert_eq!(result.monthly[5].expenses, 10_000.0);
    assert_eq!(result.monthly[12].income, 0.0);
    assert!(result.first_month_with_zero_or_negative_net_worth.is_none());
}
