//! Solution units and the plugin records they register through

use crate::part::Part;

/// Error raised by a solution unit's behavior
pub type BehaviorError = Box<dyn std::error::Error + Send + Sync>;

/// A part's behavior: takes nothing, promises nothing beyond success or failure
pub type Behavior = fn() -> Result<(), BehaviorError>;

/// Trait for implementing one part of a solution unit.
///
/// The const generic `N` is the part number (1 or 2). A unit implements this once per
/// part it supports; the derive macro checks at compile time that every declared part
/// has an implementation.
///
/// # Example
///
/// ```
/// use aoc_launcher::{BehaviorError, PartBehavior};
///
/// struct Day1;
///
/// impl PartBehavior<1> for Day1 {
///     fn run() -> Result<(), BehaviorError> {
///         println!("42");
///         Ok(())
///     }
/// }
/// ```
pub trait PartBehavior<const N: u8> {
    /// Run this part of the puzzle
    fn run() -> Result<(), BehaviorError>;
}

/// The record a (year, day) pair resolves to
#[derive(Debug, Clone, Copy)]
pub struct SolutionUnit {
    pub year: u16,
    pub day: u8,
    /// Human-readable name, shown in listings
    pub name: &'static str,
    pub part_1: Option<Behavior>,
    pub part_2: Option<Behavior>,
}

impl SolutionUnit {
    /// The behavior registered for `part`, if any
    pub fn behavior(&self, part: Part) -> Option<Behavior> {
        match part {
            Part::One => self.part_1,
            Part::Two => self.part_2,
        }
    }

    /// Parts this unit exposes, in order
    pub fn parts(&self) -> impl Iterator<Item = Part> + '_ {
        Part::ALL
            .into_iter()
            .filter(|part| self.behavior(*part).is_some())
    }
}

/// Plugin information for automatic unit registration
///
/// Normally emitted by `#[derive(AutoRegisterUnit)]`, but can be submitted by hand:
///
/// ```no_run
/// use aoc_launcher::{BehaviorError, UnitPlugin};
///
/// fn part_1() -> Result<(), BehaviorError> {
///     Ok(())
/// }
///
/// aoc_launcher::inventory::submit! {
///     UnitPlugin {
///         year: 2023,
///         day: 1,
///         name: "Trebuchet",
///         part_1: Some(part_1),
///         part_2: None,
///     }
/// }
/// ```
pub struct UnitPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    pub name: &'static str,
    pub part_1: Option<Behavior>,
    pub part_2: Option<Behavior>,
}

impl UnitPlugin {
    pub fn to_unit(&self) -> SolutionUnit {
        SolutionUnit {
            year: self.year,
            day: self.day,
            name: self.name,
            part_1: self.part_1,
            part_2: self.part_2,
        }
    }
}

/// Declares a year grouping, which may hold no units yet
pub struct YearPlugin {
    pub year: u16,
}

inventory::collect!(UnitPlugin);
inventory::collect!(YearPlugin);

/// Declare a year grouping for link-time collection
///
/// ```no_run
/// aoc_launcher::register_year!(2023);
/// ```
#[macro_export]
macro_rules! register_year {
    ($year:expr) => {
        $crate::inventory::submit! {
            $crate::YearPlugin { year: $year }
        }
    };
}

/// Register a unit type with a catalog builder, using its `PartBehavior` impls
///
/// ```
/// use aoc_launcher::{register_unit, BehaviorError, CatalogBuilder, PartBehavior};
///
/// struct Day1;
///
/// impl PartBehavior<1> for Day1 {
///     fn run() -> Result<(), BehaviorError> {
///         Ok(())
///     }
/// }
///
/// let mut builder = CatalogBuilder::new();
/// register_unit!(builder, Day1, 2023, 1, parts = [1]);
/// let catalog = builder.build();
/// assert!(catalog.resolve_unit(2023, 1).is_ok());
/// ```
#[macro_export]
macro_rules! register_unit {
    (@emit $builder:expr, $unit:ty, $year:expr, $day:expr, $part_1:expr, $part_2:expr) => {
        $builder = $builder
            .register_unit($crate::SolutionUnit {
                year: $year,
                day: $day,
                name: stringify!($unit),
                part_1: $part_1,
                part_2: $part_2,
            })
            .expect("Failed to register solution unit");
    };
    ($builder:expr, $unit:ty, $year:expr, $day:expr) => {
        $crate::register_unit!($builder, $unit, $year, $day, parts = [1, 2])
    };
    ($builder:expr, $unit:ty, $year:expr, $day:expr, parts = [1]) => {
        $crate::register_unit!(@emit $builder, $unit, $year, $day,
            Some(<$unit as $crate::PartBehavior<1>>::run as $crate::Behavior), None)
    };
    ($builder:expr, $unit:ty, $year:expr, $day:expr, parts = [2]) => {
        $crate::register_unit!(@emit $builder, $unit, $year, $day,
            None, Some(<$unit as $crate::PartBehavior<2>>::run as $crate::Behavior))
    };
    ($builder:expr, $unit:ty, $year:expr, $day:expr, parts = [1, 2]) => {
        $crate::register_unit!(@emit $builder, $unit, $year, $day,
            Some(<$unit as $crate::PartBehavior<1>>::run as $crate::Behavior),
            Some(<$unit as $crate::PartBehavior<2>>::run as $crate::Behavior))
    };
}
