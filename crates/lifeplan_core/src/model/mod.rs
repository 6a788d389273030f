mod events;
mod ids;
mod micro_plan;
mod profile;
mod results;

pub use events::{EventKind, Frequency, LifeEvent};
pub use ids::{EventId, MicroPlanId};
pub use micro_plan::MicroPlan;
pub use profile::{PlanSettings, Profile};
pub use results::{MonthlyProjectionPoint, ProjectionResult, YearlyProjectionPoint};
