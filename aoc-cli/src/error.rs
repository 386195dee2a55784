//! Error types for the CLI

use aoc_launcher::{LaunchError, RegistrationError, SelectionError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Arguments that do not form a run or a listing
    #[error("{0}")]
    Usage(clap::Error),

    /// Selection, resolution or dispatch failed
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// The command-line option a failure should be reported against, if any
    pub fn option(&self) -> Option<&'static str> {
        match self {
            CliError::Launch(LaunchError::InvalidSelection(selection)) => match selection {
                SelectionError::InvalidYear { .. } => Some("--year"),
                SelectionError::InvalidDay { .. } | SelectionError::DayOutOfRange(_) => {
                    Some("--day")
                }
                SelectionError::InvalidPart(_) => Some("--part"),
            },
            CliError::Launch(LaunchError::UnsupportedPart { .. }) => Some("--part"),
            _ => None,
        }
    }
}

impl From<SelectionError> for CliError {
    fn from(e: SelectionError) -> Self {
        CliError::Launch(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_launcher::{NotFoundError, Part};

    #[test]
    fn test_selection_errors_name_their_option() {
        let year: CliError = SelectionError::InvalidYear {
            year: 2022,
            valid: vec![2023],
        }
        .into();
        assert_eq!(year.option(), Some("--year"));

        let day: CliError = SelectionError::InvalidDay {
            year: 2023,
            day: 9,
            valid: vec![1, 2, 3, 4, 5],
        }
        .into();
        assert_eq!(day.option(), Some("--day"));
        assert_eq!(
            day.to_string(),
            "Day 9 not available for year 2023. Valid: 1, 2, 3, 4, 5"
        );

        let part: CliError = LaunchError::UnsupportedPart {
            year: 2023,
            day: 1,
            part: Part::Two,
        }
        .into();
        assert_eq!(part.option(), Some("--part"));
    }

    #[test]
    fn test_fatal_errors_have_no_option() {
        let not_found: CliError = LaunchError::from(NotFoundError::Unit(2023, 1)).into();
        assert_eq!(not_found.option(), None);
        assert_eq!(
            not_found.to_string(),
            "No solution unit registered for year 2023 day 01"
        );

        let behavior: CliError = LaunchError::Behavior("input missing".into()).into();
        assert_eq!(behavior.option(), None);
        assert_eq!(behavior.to_string(), "input missing");
    }
}
