//! Catalog of year groupings and the solution units registered under them

use crate::error::{NotFoundError, RegistrationError};
use crate::unit::{SolutionUnit, UnitPlugin, YearPlugin};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

#[inline]
fn check_year_day(year: u16, day: u8) -> Result<(), RegistrationError> {
    if year == 0 || day == 0 || day > DAYS_PER_YEAR {
        return Err(RegistrationError::InvalidYearDay(year, day));
    }
    Ok(())
}

/// Builder for constructing a [`Catalog`] with a fluent API
///
/// Registering a unit implicitly creates its year grouping. A grouping can also be
/// declared on its own, in which case it lists no days.
///
/// # Example
///
/// ```
/// # use aoc_launcher::{BehaviorError, CatalogBuilder, SolutionUnit};
/// fn part_1() -> Result<(), BehaviorError> {
///     Ok(())
/// }
///
/// let catalog = CatalogBuilder::new()
///     .register_year(2022)
///     .unwrap()
///     .register_unit(SolutionUnit {
///         year: 2023,
///         day: 1,
///         name: "Trebuchet",
///         part_1: Some(part_1),
///         part_2: None,
///     })
///     .unwrap()
///     .build();
///
/// assert_eq!(catalog.list_years().into_iter().collect::<Vec<_>>(), vec![2022, 2023]);
/// assert!(catalog.list_days(2022).unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groupings: BTreeMap<u16, BTreeMap<u8, SolutionUnit>>,
}

impl CatalogBuilder {
    /// Create a new empty catalog builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a year grouping. Declaring an existing grouping again is a no-op.
    pub fn register_year(mut self, year: u16) -> Result<Self, RegistrationError> {
        if year == 0 {
            return Err(RegistrationError::InvalidYearDay(year, 0));
        }
        self.groupings.entry(year).or_default();
        Ok(self)
    }

    /// Register a unit under its (year, day)
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the unit registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate unit or out-of-range year/day
    pub fn register_unit(mut self, unit: SolutionUnit) -> Result<Self, RegistrationError> {
        check_year_day(unit.year, unit.day)?;

        let days = self.groupings.entry(unit.year).or_default();
        if days.contains_key(&unit.day) {
            return Err(RegistrationError::DuplicateUnit(unit.year, unit.day));
        }
        trace!(year = unit.year, day = unit.day, name = unit.name, "registered unit");
        days.insert(unit.day, unit);
        Ok(self)
    }

    /// Register every year grouping and unit submitted via `inventory::submit!`
    ///
    /// ```no_run
    /// # use aoc_launcher::CatalogBuilder;
    /// let catalog = CatalogBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<YearPlugin>() {
            self = self.register_year(plugin.year)?;
        }
        for plugin in inventory::iter::<UnitPlugin>() {
            self = self.register_unit(plugin.to_unit())?;
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable catalog
    pub fn build(self) -> Catalog {
        debug!(
            years = self.groupings.len(),
            units = self.groupings.values().map(BTreeMap::len).sum::<usize>(),
            "catalog built"
        );
        Catalog {
            groupings: self.groupings,
        }
    }
}

/// Immutable catalog of available years, days and units
///
/// Built once at process start and passed explicitly to whatever needs the
/// available choices. Every query is a pure read, so repeated calls agree.
#[derive(Debug)]
pub struct Catalog {
    groupings: BTreeMap<u16, BTreeMap<u8, SolutionUnit>>,
}

impl Catalog {
    /// Every registered year grouping. Empty if nothing is registered.
    pub fn list_years(&self) -> BTreeSet<u16> {
        self.groupings.keys().copied().collect()
    }

    /// Days registered under `year`
    ///
    /// # Returns
    /// * `Ok(set)` - Possibly empty if the grouping exists with no units
    /// * `Err(NotFoundError::Year)` - No grouping exists for `year`
    pub fn list_days(&self, year: u16) -> Result<BTreeSet<u8>, NotFoundError> {
        self.groupings
            .get(&year)
            .map(|days| days.keys().copied().collect())
            .ok_or(NotFoundError::Year(year))
    }

    /// Look up the unit for a (year, day) pair
    pub fn resolve_unit(&self, year: u16, day: u8) -> Result<&SolutionUnit, NotFoundError> {
        let unit = self
            .groupings
            .get(&year)
            .and_then(|days| days.get(&day))
            .ok_or(NotFoundError::Unit(year, day))?;
        debug!(year, day, name = unit.name, "resolved unit");
        Ok(unit)
    }

    /// Iterate over all units in (year, day) order
    pub fn units(&self) -> impl Iterator<Item = &SolutionUnit> + '_ {
        self.groupings.values().flat_map(BTreeMap::values)
    }

    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::BehaviorError;

    fn noop() -> Result<(), BehaviorError> {
        Ok(())
    }

    fn unit(year: u16, day: u8) -> SolutionUnit {
        SolutionUnit {
            year,
            day,
            name: "test",
            part_1: Some(noop),
            part_2: None,
        }
    }

    #[test]
    fn test_duplicate_unit_rejected() {
        let result = CatalogBuilder::new()
            .register_unit(unit(2023, 1))
            .unwrap()
            .register_unit(unit(2023, 1));
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateUnit(2023, 1))
        ));
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        let result = CatalogBuilder::new().register_unit(unit(2023, 26));
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2023, 26))
        ));

        let result = CatalogBuilder::new().register_unit(unit(2023, 0));
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidYearDay(2023, 0))
        ));
    }

    #[test]
    fn test_year_zero_rejected() {
        assert!(CatalogBuilder::new().register_year(0).is_err());
        assert!(CatalogBuilder::new().register_unit(unit(0, 1)).is_err());
    }

    #[test]
    fn test_empty_catalog_lists_no_years() {
        let catalog = CatalogBuilder::new().build();
        assert!(catalog.is_empty());
        assert!(catalog.list_years().is_empty());
        assert_eq!(catalog.list_days(2023), Err(NotFoundError::Year(2023)));
    }

    #[test]
    fn test_missing_grouping_differs_from_empty_grouping() {
        let catalog = CatalogBuilder::new().register_year(2022).unwrap().build();

        assert_eq!(catalog.list_days(2022), Ok(BTreeSet::new()));
        assert_eq!(catalog.list_days(2021), Err(NotFoundError::Year(2021)));
    }

    #[test]
    fn test_register_year_is_idempotent_and_keeps_units() {
        let catalog = CatalogBuilder::new()
            .register_unit(unit(2023, 4))
            .unwrap()
            .register_year(2023)
            .unwrap()
            .build();

        assert_eq!(catalog.list_days(2023).unwrap(), BTreeSet::from([4]));
    }

    #[test]
    fn test_units_iterate_in_order() {
        let catalog = CatalogBuilder::new()
            .register_unit(unit(2024, 2))
            .unwrap()
            .register_unit(unit(2023, 9))
            .unwrap()
            .register_unit(unit(2024, 1))
            .unwrap()
            .build();

        let order: Vec<(u16, u8)> = catalog.units().map(|u| (u.year, u.day)).collect();
        assert_eq!(order, vec![(2023, 9), (2024, 1), (2024, 2)]);
    }

    #[test]
    fn test_resolve_missing_unit() {
        let catalog = CatalogBuilder::new()
            .register_unit(unit(2023, 1))
            .unwrap()
            .build();

        assert!(catalog.resolve_unit(2023, 1).is_ok());
        assert_eq!(
            catalog.resolve_unit(2023, 2).unwrap_err(),
            NotFoundError::Unit(2023, 2)
        );
        assert_eq!(
            catalog.resolve_unit(2024, 1).unwrap_err(),
            NotFoundError::Unit(2024, 1)
        );
    }
}
