//! Error types for the launcher library

use crate::part::Part;
use crate::unit::BehaviorError;
use itertools::Itertools;
use thiserror::Error;

/// A selector that falls outside the discovered catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The year has no registered grouping
    #[error("Year {year} not available. Valid: {}", .valid.iter().join(", "))]
    InvalidYear { year: u32, valid: Vec<u16> },
    /// The day is not registered under the selected year
    #[error("Day {day} not available for year {year}. Valid: {}", .valid.iter().join(", "))]
    InvalidDay { year: u16, day: u32, valid: Vec<u8> },
    /// The day cannot name any day, and no year is selected to list valid ones
    #[error("Day {0} is out of range")]
    DayOutOfRange(u32),
    /// The part number is not one of the two recognized parts
    #[error("Part {0} is not valid. Valid: 1, 2")]
    InvalidPart(u8),
}

/// The catalog and resolution disagree about what exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// No grouping is registered for the year
    #[error("No grouping registered for year {0}")]
    Year(u16),
    /// No unit is registered for the year and day
    #[error("No solution unit registered for year {0} day {1:02}")]
    Unit(u16, u8),
}

/// Error type for a single discover-validate-dispatch run
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A selector was rejected during validation
    #[error(transparent)]
    InvalidSelection(#[from] SelectionError),
    /// A grouping or unit vanished between discovery and resolution
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// The resolved unit does not expose the requested part
    #[error("Day {day} of year {year} does not have part {part}")]
    UnsupportedPart { year: u16, day: u8, part: Part },
    /// The invoked behavior failed; carried through untouched
    #[error("{0}")]
    Behavior(BehaviorError),
}

impl LaunchError {
    /// Take back the collaborator's own error, if that is what this is
    pub fn into_behavior_error(self) -> Result<BehaviorError, Self> {
        match self {
            LaunchError::Behavior(e) => Ok(e),
            other => Err(other),
        }
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A unit is already registered for the year and day
    #[error("Duplicate solution unit registration for year {0} day {1:02}")]
    DuplicateUnit(u16, u8),
    /// Year must be positive and day within 1-25
    #[error("Invalid year/day combination: year {0} day {1}")]
    InvalidYearDay(u16, u8),
}
