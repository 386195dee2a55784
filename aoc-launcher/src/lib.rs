//! Advent of Code Launcher Library
//!
//! Discovers the solution units linked into a binary, validates a (year, day, part)
//! selection against them, and runs the selected part.
//!
//! # Overview
//!
//! This library provides:
//! - A [`PartBehavior`] trait for writing the parts of a solution unit
//! - Link-time collection of units and year groupings via `inventory`
//! - A [`Catalog`] answering which years and days are available
//! - A [`Dispatcher`] that validates selectors, resolves the unit and invokes one part
//!
//! # Quick Example
//!
//! ```
//! use aoc_launcher::{register_unit, BehaviorError, CatalogBuilder, Dispatcher, Part, PartBehavior};
//!
//! struct Day3;
//!
//! impl PartBehavior<1> for Day3 {
//!     fn run() -> Result<(), BehaviorError> {
//!         println!("answer");
//!         Ok(())
//!     }
//! }
//!
//! let mut builder = CatalogBuilder::new();
//! register_unit!(builder, Day3, 2023, 3, parts = [1]);
//! let catalog = builder.build();
//!
//! let dispatcher = Dispatcher::new(&catalog);
//! dispatcher.launch(2023, 3, Part::One).unwrap();
//! assert!(dispatcher.launch(2023, 3, Part::Two).is_err());
//! assert!(dispatcher.launch(2023, 9, Part::One).is_err());
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterUnit)]` to register a unit at its definition site:
//! ```ignore
//! #[derive(AutoRegisterUnit)]
//! #[aoc(year = 2023, day = 3, parts = [1, 2])]
//! struct Day3;
//! ```
//! and `register_year!(2023)` to declare a grouping that may not hold any units yet.
//! [`CatalogBuilder::register_all_plugins`] collects both.

mod dispatch;
mod error;
mod part;
mod registry;
mod unit;

// Re-export public API
pub use dispatch::{DayValidated, Dispatched, Dispatcher, Resolved, Unvalidated, YearValidated};
pub use error::{LaunchError, NotFoundError, RegistrationError, SelectionError};
pub use part::Part;
pub use registry::{Catalog, CatalogBuilder, DAYS_PER_YEAR};
pub use unit::{Behavior, BehaviorError, PartBehavior, SolutionUnit, UnitPlugin, YearPlugin};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_launcher_macros::AutoRegisterUnit;
