//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_launcher::Part;
use clap::error::ErrorKind;

/// What this invocation should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Validate and dispatch a single selection
    Run { year: u16, day: u32, part: Part },
    /// Print the catalog, optionally for one year only
    List { year: Option<u16> },
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Log verbosity from repeated `-v`
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mode = match (args.list, args.year, args.day) {
            (true, year, _) => Mode::List { year },
            (false, Some(year), Some(day)) => Mode::Run {
                year,
                day,
                part: Part::try_from(args.part)?,
            },
            // clap enforces this for parsed args; only hand-built `Args` get here
            (false, _, _) => {
                return Err(CliError::Usage(clap::Error::raw(
                    ErrorKind::MissingRequiredArgument,
                    "--year and --day are required unless --list is given\n",
                )));
            }
        };

        Ok(Config {
            mode,
            verbosity: args.verbose,
        })
    }
}
