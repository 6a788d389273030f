//! Event Builder DSL
//!
//! Provides a fluent API for creating life events.
//!
//! # Examples
//!
//! ```ignore
//! use lifeplan_core::config::EventBuilder;
//!
//! // Daycare for three years
//! let daycare = EventBuilder::expense("Daycare")
//!     .amount(1_200.0)
//!     .on(2026, 9, 1)
//!     .monthly()
//!     .until(jiff::civil::date(2029, 8, 31));
//!
//! // A yearly bonus
//! let bonus = EventBuilder::contribution("Bonus")
//!     .amount(10_000.0)
//!     .on(2026, 3, 1)
//!     .yearly();
//! ```

use jiff::civil::Date;

use crate::error::BuildError;
use crate::model::{EventId, EventKind, Frequency, LifeEvent};

#[derive(Debug, Clone, Copy)]
pub(crate) enum DateSpec {
    Date(Date),
    Ymd(i16, i8, i8),
}

impl DateSpec {
    pub(crate) fn resolve(self) -> Result<Date, BuildError> {
        match self {
            DateSpec::Date(d) => Ok(d),
            DateSpec::Ymd(year, month, day) => Date::new(year, month, day)
                .map_err(|_| BuildError::InvalidDate { year, month, day }),
        }
    }
}

/// Builder for creating life events with a fluent API
#[derive(Debug, Clone)]
pub struct EventBuilder {
    title: String,
    kind: EventKind,
    amount: f64,
    date: Option<DateSpec>,
    end_date: Option<Date>,
    frequency: Frequency,
    duration_months: Option<u32>,
    inflation_indexed: bool,
}

impl EventBuilder {
    fn new(title: impl Into<String>, kind: EventKind) -> Self {
        Self {
            title: title.into(),
            kind,
            amount: 0.0,
            date: None,
            end_date: None,
            frequency: Frequency::Once,
            duration_months: None,
            inflation_indexed: false,
        }
    }

    /// An income-increasing event
    #[must_use]
    pub fn contribution(title: impl Into<String>) -> Self {
        Self::new(title, EventKind::Contribution)
    }

    /// An expense-increasing event tagged `expense`
    #[must_use]
    pub fn expense(title: impl Into<String>) -> Self {
        Self::new(title, EventKind::from("expense"))
    }

    /// An event with an arbitrary type tag
    #[must_use]
    pub fn tagged(title: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::new(title, EventKind::from(tag.into()))
    }

    #[must_use]
    pub fn amount(mut self, value: f64) -> Self {
        self.amount = value;
        self
    }

    /// Set the start date (convenience method)
    #[must_use]
    pub fn on(mut self, year: i16, month: i8, day: i8) -> Self {
        self.date = Some(DateSpec::Ymd(year, month, day));
        self
    }

    #[must_use]
    pub fn on_date(mut self, date: Date) -> Self {
        self.date = Some(DateSpec::Date(date));
        self
    }

    /// Inclusive last date the event applies
    #[must_use]
    pub fn until(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.frequency = Frequency::Once;
        self
    }

    #[must_use]
    pub fn monthly(mut self) -> Self {
        self.frequency = Frequency::Monthly;
        self
    }

    #[must_use]
    pub fn yearly(mut self) -> Self {
        self.frequency = Frequency::Yearly;
        self
    }

    /// Stored with the event; not used by the projection
    #[must_use]
    pub fn duration_months(mut self, months: u32) -> Self {
        self.duration_months = Some(months);
        self
    }

    /// Stored with the event; not used by the projection
    #[must_use]
    pub fn inflation_indexed(mut self) -> Self {
        self.inflation_indexed = true;
        self
    }

    pub(crate) fn build(self, id: EventId) -> Result<LifeEvent, BuildError> {
        let date = self
            .date
            .ok_or_else(|| BuildError::EventMissingDate(self.title.clone()))?
            .resolve()?;

        Ok(LifeEvent {
            id,
            kind: self.kind,
            title: self.title,
            date,
            end_date: self.end_date,
            amount: self.amount,
            frequency: self.frequency,
            duration_months: self.duration_months,
            inflation_indexed: self.inflation_indexed,
        })
    }
}
