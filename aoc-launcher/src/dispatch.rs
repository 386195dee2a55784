//! Selection validation and dispatch
//!
//! A run moves through `Unvalidated -> YearValidated -> DayValidated -> Resolved ->
//! Dispatched`. Each state is its own type, so a stage can only be reached by passing
//! through the one before it.

use crate::error::{LaunchError, SelectionError};
use crate::part::Part;
use crate::registry::Catalog;
use crate::unit::SolutionUnit;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

/// Validates selectors against a catalog and invokes the chosen behavior
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'c> {
    catalog: &'c Catalog,
}

impl<'c> Dispatcher<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Check that `year` has a registered grouping
    pub fn validate_year(&self, year: u32) -> Result<u16, SelectionError> {
        let years = self.catalog.list_years();
        match u16::try_from(year) {
            Ok(year) if years.contains(&year) => Ok(year),
            _ => Err(SelectionError::InvalidYear {
                year,
                valid: years.into_iter().collect(),
            }),
        }
    }

    /// Check that `day` is registered under `year`
    ///
    /// With no year selected yet there is nothing to check against, so the day is
    /// passed through unchanged as long as it fits a day number.
    pub fn validate_day(&self, year: Option<u16>, day: u32) -> Result<u8, LaunchError> {
        let Some(year) = year else {
            debug!(day, "no year selected, day left unchecked");
            return Ok(u8::try_from(day).map_err(|_| SelectionError::DayOutOfRange(day))?);
        };

        let days = self.catalog.list_days(year)?;
        match u8::try_from(day) {
            Ok(day) if days.contains(&day) => Ok(day),
            _ => Err(SelectionError::InvalidDay {
                year,
                day,
                valid: days.into_iter().collect(),
            }
            .into()),
        }
    }

    /// Map a validated (year, day) pair to its unit
    pub fn resolve_unit(&self, year: u16, day: u8) -> Result<&'c SolutionUnit, LaunchError> {
        Ok(self.catalog.resolve_unit(year, day)?)
    }

    /// Invoke the behavior registered for `part` on `unit`
    ///
    /// # Returns
    /// * `Ok(Dispatched)` - The behavior ran once and succeeded
    /// * `Err(LaunchError::UnsupportedPart)` - The unit has no such part; nothing ran
    /// * `Err(LaunchError::Behavior)` - The behavior's own error, unchanged
    pub fn dispatch(&self, unit: &SolutionUnit, part: Part) -> Result<Dispatched, LaunchError> {
        let behavior = unit.behavior(part).ok_or(LaunchError::UnsupportedPart {
            year: unit.year,
            day: unit.day,
            part,
        })?;

        info!(year = unit.year, day = unit.day, %part, name = unit.name, "dispatching");
        let started = Utc::now();
        behavior().map_err(LaunchError::Behavior)?;
        let finished = Utc::now();

        let dispatched = Dispatched {
            year: unit.year,
            day: unit.day,
            part,
            started,
            finished,
        };
        info!(elapsed = %dispatched.elapsed(), "behavior finished");
        Ok(dispatched)
    }

    /// Start a selection chain in the `Unvalidated` state
    pub fn select(&self) -> Unvalidated<'c> {
        Unvalidated { dispatcher: *self }
    }

    /// Run the whole chain for one (year, day, part) selection
    pub fn launch(&self, year: u32, day: u32, part: Part) -> Result<Dispatched, LaunchError> {
        self.select()
            .year(year)?
            .day(day)?
            .resolve()?
            .dispatch(part)
    }
}

/// Nothing has been checked yet
#[derive(Debug, Clone, Copy)]
pub struct Unvalidated<'c> {
    dispatcher: Dispatcher<'c>,
}

impl<'c> Unvalidated<'c> {
    pub fn year(self, year: u32) -> Result<YearValidated<'c>, LaunchError> {
        let year = self.dispatcher.validate_year(year)?;
        Ok(YearValidated {
            dispatcher: self.dispatcher,
            year,
        })
    }
}

/// The year is known to have a grouping
#[derive(Debug, Clone, Copy)]
pub struct YearValidated<'c> {
    dispatcher: Dispatcher<'c>,
    year: u16,
}

impl<'c> YearValidated<'c> {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(self, day: u32) -> Result<DayValidated<'c>, LaunchError> {
        let day = self.dispatcher.validate_day(Some(self.year), day)?;
        Ok(DayValidated {
            dispatcher: self.dispatcher,
            year: self.year,
            day,
        })
    }
}

/// Both year and day are in the catalog
#[derive(Debug, Clone, Copy)]
pub struct DayValidated<'c> {
    dispatcher: Dispatcher<'c>,
    year: u16,
    day: u8,
}

impl<'c> DayValidated<'c> {
    pub fn resolve(self) -> Result<Resolved<'c>, LaunchError> {
        let unit = self.dispatcher.resolve_unit(self.year, self.day)?;
        Ok(Resolved {
            dispatcher: self.dispatcher,
            unit,
        })
    }
}

/// The unit has been looked up but nothing has run
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'c> {
    dispatcher: Dispatcher<'c>,
    unit: &'c SolutionUnit,
}

impl<'c> Resolved<'c> {
    pub fn unit(&self) -> &'c SolutionUnit {
        self.unit
    }

    pub fn dispatch(self, part: Part) -> Result<Dispatched, LaunchError> {
        self.dispatcher.dispatch(self.unit, part)
    }
}

/// Terminal success state, with timing of the behavior
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub year: u16,
    pub day: u8,
    pub part: Part,
    /// When the behavior was invoked (UTC)
    pub started: DateTime<Utc>,
    /// When the behavior returned (UTC)
    pub finished: DateTime<Utc>,
}

impl Dispatched {
    pub fn elapsed(&self) -> TimeDelta {
        self.finished - self.started
    }
}
