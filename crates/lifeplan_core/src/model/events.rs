//! Life events
//!
//! A life event is a discrete or recurring adjustment to a month's income or
//! expenses, anchored to a date. Events are evaluated independently of each
//! other and their order in the input list does not matter.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::EventId;

/// What an event does to the month it lands in.
///
/// Only `contribution` is special: it raises income. Every other tag raises
/// expenses. Unknown tags are kept verbatim so they survive a round trip
/// through the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Contribution,
    Other(String),
}

impl EventKind {
    pub const CONTRIBUTION_TAG: &'static str = "contribution";

    /// Expense events (any non-contribution tag) use the magnitude of `amount`.
    #[must_use]
    pub fn is_contribution(&self) -> bool {
        matches!(self, EventKind::Contribution)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Contribution => Self::CONTRIBUTION_TAG,
            EventKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EventKind {
    fn from(tag: String) -> Self {
        if tag == Self::CONTRIBUTION_TAG {
            EventKind::Contribution
        } else {
            EventKind::Other(tag)
        }
    }
}

impl From<&str> for EventKind {
    fn from(tag: &str) -> Self {
        EventKind::from(tag.to_string())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Contribution => EventKind::CONTRIBUTION_TAG.to_string(),
            EventKind::Other(tag) => tag,
        }
    }
}

/// How often an event applies once it has started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Only in the calendar month of the event date
    Once,
    /// Every month from the event date onward
    Monthly,
    /// Every year in the month-of-year of the event date
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: EventId,
    pub kind: EventKind,
    pub title: String,
    /// Start date. Comparisons use the calendar month only.
    pub date: Date,
    /// Inclusive upper bound, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    /// Signed amount. Expense events use the absolute value; contribution
    /// events use it as-is.
    pub amount: f64,
    pub frequency: Frequency,

    /// Carried for the persistence layer; the engine never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_months: Option<u32>,
    /// Carried for the persistence layer; the engine never reads it.
    #[serde(default)]
    pub inflation_indexed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_from_tag() {
        assert_eq!(EventKind::from("contribution"), EventKind::Contribution);
        assert_eq!(
            EventKind::from("purchase"),
            EventKind::Other("purchase".to_string())
        );
        // Tags are case sensitive
        assert!(!EventKind::from("Contribution").is_contribution());
    }

    #[test]
    fn test_event_kind_serde_roundtrip_keeps_unknown_tags() {
        let kind = EventKind::from("medical");
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"medical\"");
        let back: EventKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn test_frequency_serde_lowercase() {
        let f: Frequency = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(f, Frequency::Yearly);
        assert_eq!(serde_json::to_string(&Frequency::Once).unwrap(), "\"once\"");
    }
}
