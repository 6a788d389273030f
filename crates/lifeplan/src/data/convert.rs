use jiff::civil::Date;
use lifeplan_core::ProjectionInput;
use lifeplan_core::model::{EventId, EventKind, LifeEvent, MicroPlan, MicroPlanId, Profile};

use super::scenario_data::{EventData, MicroPlanData, ScenarioData};

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// (field, value)
    InvalidDate(String, String),
    /// (field, value)
    NonFiniteAmount(String, f64),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidDate(field, value) => {
                write!(f, "Invalid date for {}: '{}' (expected YYYY-MM-DD)", field, value)
            }
            ConvertError::NonFiniteAmount(field, value) => {
                write!(f, "Amount for {} is not a finite number: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Parse a `YYYY-MM-DD` date, naming `field` in the error.
pub fn parse_date(field: &str, value: &str) -> Result<Date, ConvertError> {
    value
        .trim()
        .parse::<Date>()
        .map_err(|_| ConvertError::InvalidDate(field.to_string(), value.to_string()))
}

fn check_finite(field: &str, value: f64) -> Result<f64, ConvertError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConvertError::NonFiniteAmount(field.to_string(), value))
    }
}

/// Convert ScenarioData (human-readable YAML) to ProjectionInput (engine format)
pub fn to_projection_input(data: &ScenarioData) -> Result<ProjectionInput, ConvertError> {
    let birth_date = parse_date("profile.birth_date", &data.profile.birth_date)?;
    let profile = Profile::new(birth_date, data.profile.life_expectancy_years);

    let settings = &data.settings;
    for (field, value) in [
        ("settings.base_net_worth", settings.base_net_worth),
        ("settings.base_monthly_income", settings.base_monthly_income),
        ("settings.base_monthly_expenses", settings.base_monthly_expenses),
        ("settings.monthly_contribution", settings.monthly_contribution),
        ("settings.expected_return_yearly", settings.expected_return_yearly),
        ("settings.inflation_yearly", settings.inflation_yearly),
        ("settings.retirement_monthly_income", settings.retirement_monthly_income),
    ] {
        check_finite(field, value)?;
    }

    let events = data
        .events
        .iter()
        .enumerate()
        .map(|(i, e)| convert_event(i, e))
        .collect::<Result<Vec<_>, _>>()?;

    let micro_plans = data
        .micro_plans
        .iter()
        .enumerate()
        .map(|(i, p)| convert_micro_plan(i, p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProjectionInput {
        profile,
        settings: settings.clone(),
        events,
        micro_plans,
    })
}

fn convert_event(index: usize, data: &EventData) -> Result<LifeEvent, ConvertError> {
    let field = |name: &str| format!("events[{index}].{name}");

    let date = parse_date(&field("date"), &data.date)?;
    let end_date = data
        .end_date
        .as_deref()
        .map(|d| parse_date(&field("end_date"), d))
        .transpose()?;

    Ok(LifeEvent {
        id: EventId(data.id.unwrap_or(index as u32)),
        kind: EventKind::from(data.kind.as_str()),
        title: data.title.clone(),
        date,
        end_date,
        amount: check_finite(&field("amount"), data.amount)?,
        frequency: data.frequency,
        duration_months: data.duration_months,
        inflation_indexed: data.inflation_indexed,
    })
}

fn convert_micro_plan(index: usize, data: &MicroPlanData) -> Result<MicroPlan, ConvertError> {
    let field = |name: &str| format!("micro_plans[{index}].{name}");

    Ok(MicroPlan {
        id: MicroPlanId(data.id.unwrap_or(index as u32)),
        effective_date: parse_date(&field("effective_date"), &data.effective_date)?,
        monthly_income: check_finite(&field("monthly_income"), data.monthly_income)?,
        monthly_expenses: check_finite(&field("monthly_expenses"), data.monthly_expenses)?,
        monthly_contribution: check_finite(
            &field("monthly_contribution"),
            data.monthly_contribution,
        )?,
    })
}
