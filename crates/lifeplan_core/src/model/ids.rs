//! Unique identifiers for projection inputs
//!
//! Identifiers are opaque to the engine. They exist so callers can map
//! results and edits back onto the records they loaded.

use serde::{Deserialize, Serialize};

/// Unique identifier for a LifeEvent within a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u32);

/// Unique identifier for a MicroPlan within a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MicroPlanId(pub u32);
