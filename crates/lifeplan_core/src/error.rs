use std::fmt;

/// Errors from assembling a projection input with [`crate::config::ProjectionBuilder`]
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    MissingBirthDate,
    InvalidDate { year: i16, month: i8, day: i8 },
    EventMissingDate(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingBirthDate => write!(f, "birth date is required"),
            BuildError::InvalidDate { year, month, day } => {
                write!(f, "invalid date {year:04}-{month:02}-{day:02}")
            }
            BuildError::EventMissingDate(title) => {
                write!(f, "event '{title}' has no date")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Errors from running a parameter sweep
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// No values to evaluate
    NoValues,
    /// A sweep value was NaN or infinite
    NonFiniteValue(f64),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NoValues => write!(f, "sweep requires at least one value"),
            SweepError::NonFiniteValue(v) => write!(f, "sweep value {v} is not finite"),
        }
    }
}

impl std::error::Error for SweepError {}
