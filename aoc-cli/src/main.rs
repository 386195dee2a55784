//! AOC CLI - Command-line launcher for Advent of Code solution units

mod cli;
mod config;
mod error;
mod logging;
mod output;

// Import aoc-solutions to link the unit plugins
use aoc_solutions as _;

use aoc_launcher::{Catalog, CatalogBuilder, Dispatcher};
use clap::{Command, FromArgMatches};
use clap::error::ErrorKind;
use cli::Args;
use config::{Config, Mode};
use error::CliError;
use tracing::{debug, info};

fn main() {
    // Discovered once; the same catalog drives both argument parsing and dispatch
    let catalog = match build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut command = cli::command(&catalog);
    let matches = command.get_matches_mut();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.format(&mut command).exit());

    let config = Config::from_args(args).unwrap_or_else(|e| report(&mut command, e));

    logging::init(config.verbosity);
    debug!(years = ?catalog.list_years(), "catalog discovered");

    if let Err(e) = run(&catalog, config) {
        report(&mut command, e);
    }
}

/// Exit with a usage error when the failure belongs to an option, plain error otherwise
fn report(command: &mut Command, e: CliError) -> ! {
    match usage_error(command, e) {
        Ok(usage) => usage.exit(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Turn an option-shaped failure into a clap usage error; hand anything else back
fn usage_error(command: &mut Command, e: CliError) -> Result<clap::Error, CliError> {
    if let CliError::Usage(usage) = e {
        return Ok(usage.format(command));
    }
    match e.option() {
        Some(option) => Ok(command.error(
            ErrorKind::InvalidValue,
            format!("invalid value for '{}': {}", option, e),
        )),
        None => Err(e),
    }
}

/// Build the catalog from every linked plugin
fn build_catalog() -> Result<Catalog, CliError> {
    Ok(CatalogBuilder::new().register_all_plugins()?.build())
}

fn run(catalog: &Catalog, config: Config) -> Result<(), CliError> {
    match config.mode {
        Mode::List { year } => output::print_catalog(catalog, year),
        Mode::Run { year, day, part } => {
            let dispatched = Dispatcher::new(catalog).launch(u32::from(year), day, part)?;
            info!(
                year = dispatched.year,
                day = dispatched.day,
                part = %dispatched.part,
                elapsed_ms = dispatched.elapsed().num_milliseconds(),
                "done"
            );
            Ok(())
        }
    }
}
