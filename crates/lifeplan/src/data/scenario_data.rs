use lifeplan_core::model::{Frequency, PlanSettings};
use serde::{Deserialize, Serialize};

/// A complete scenario in human-readable format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioData {
    /// Optional display name; defaults to the file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub profile: ProfileData,

    /// Plan assumptions; omitted fields take the engine defaults
    #[serde(default)]
    pub settings: PlanSettings,

    #[serde(default)]
    pub events: Vec<EventData>,

    #[serde(default)]
    pub micro_plans: Vec<MicroPlanData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    /// Birth date (YYYY-MM-DD format)
    pub birth_date: String,

    #[serde(default = "default_life_expectancy")]
    pub life_expectancy_years: i32,
}

fn default_life_expectancy() -> i32 {
    90
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    /// Assigned from the list position when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// `contribution` raises income; any other tag raises expenses
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub title: String,

    /// Start date (YYYY-MM-DD format)
    pub date: String,

    /// Inclusive end date (YYYY-MM-DD format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    pub amount: f64,

    #[serde(default = "default_frequency")]
    pub frequency: Frequency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,

    #[serde(default)]
    pub inflation_indexed: bool,
}

fn default_frequency() -> Frequency {
    Frequency::Once
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicroPlanData {
    /// Assigned from the list position when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Effective date (YYYY-MM-DD format)
    pub effective_date: String,

    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_contribution: f64,
}

impl ScenarioData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
