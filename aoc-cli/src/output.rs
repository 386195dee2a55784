//! Catalog listing

use aoc_launcher::{Catalog, LaunchError};
use itertools::Itertools;
use std::io::{self, Write};

use crate::error::CliError;

/// Write the catalog, one year header followed by its days
///
/// ```text
/// 2025
///   day 01  Secret Entrance  parts 1, 2
/// 2026  (no days)
/// ```
pub fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    year_filter: Option<u16>,
) -> Result<(), CliError> {
    let years: Vec<u16> = match year_filter {
        Some(year) => vec![year],
        None => catalog.list_years().into_iter().collect(),
    };

    if years.is_empty() {
        writeln!(out, "No solution units registered.")?;
        return Ok(());
    }

    for year in years {
        let days = catalog.list_days(year).map_err(LaunchError::from)?;
        if days.is_empty() {
            writeln!(out, "{year}  (no days)")?;
            continue;
        }

        writeln!(out, "{year}")?;
        for day in days {
            let unit = catalog.resolve_unit(year, day).map_err(LaunchError::from)?;
            writeln!(
                out,
                "  day {:02}  {}  parts {}",
                day,
                unit.name,
                unit.parts().join(", ")
            )?;
        }
    }
    Ok(())
}

/// Print the catalog to stdout
pub fn print_catalog(catalog: &Catalog, year_filter: Option<u16>) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&mut out, catalog, year_filter)
}
