//! Scenario files and the data directory
//!
//! Scenarios are stored as human-readable YAML ([`ScenarioData`]) and
//! converted into the engine's [`lifeplan_core::ProjectionInput`] by
//! [`convert::to_projection_input`], which is where malformed data is
//! rejected.

pub mod convert;
pub mod scenario_data;
pub mod storage;

pub use convert::{ConvertError, parse_date, to_projection_input};
pub use scenario_data::{EventData, MicroPlanData, ProfileData, ScenarioData};
pub use storage::{DataConfig, DataDirectory, StorageError, load_scenario_file};
