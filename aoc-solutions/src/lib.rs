//! Advent of Code solution units with automatic registration
//!
//! Units are organized as `year_YYYY/day_DD`. Each one derives `AutoRegisterUnit`, and
//! each year module declares its grouping with `register_year!`, so linking this crate
//! is all a launcher needs to discover them.

pub mod input;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
