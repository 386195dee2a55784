//! CLI argument parsing using clap

use aoc_launcher::{Catalog, SelectionError};
use clap::{Command, CommandFactory, Parser};
use itertools::Itertools;
use std::collections::BTreeSet;

/// Advent of Code solution launcher
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run one Advent of Code solution unit", version)]
pub struct Args {
    /// Year to run
    #[arg(short, long, required_unless_present = "list")]
    pub year: Option<u16>,

    /// Day to run. Must exist for the selected year
    #[arg(short, long, required_unless_present = "list")]
    pub day: Option<u32>,

    /// Part to run (1 or 2)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// List available years, days and parts instead of running anything
    #[arg(short, long, conflicts_with = "day")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Build the command with `--year` restricted to the catalog's years
///
/// The choices are fixed here, once, before any other argument is looked at.
pub fn command(catalog: &Catalog) -> Command {
    let years = catalog.list_years();
    let available = if years.is_empty() {
        "none registered".to_string()
    } else {
        years.iter().join(", ")
    };

    Args::command().mut_arg("year", move |arg| {
        arg.value_parser(move |value: &str| parse_year(value, &years))
            .help(format!("Year to run. Available: {available}"))
    })
}

fn parse_year(value: &str, years: &BTreeSet<u16>) -> Result<u16, Box<dyn std::error::Error + Send + Sync>> {
    let year: u32 = value.trim().parse()?;
    match u16::try_from(year) {
        Ok(year) if years.contains(&year) => Ok(year),
        _ => Err(Box::new(SelectionError::InvalidYear {
            year,
            valid: years.iter().copied().collect(),
        })),
    }
}
