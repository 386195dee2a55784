//! Log setup for the launcher. Logs go to stderr; stdout is left to the solution units.

use itertools::Itertools;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Targets that follow `-v`; everything else stays at the subscriber default
const TARGETS: [&str; 3] = ["aoc", "aoc_launcher", "aoc_solutions"];

/// Install the subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity).as_str().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        assert_eq!(
            default_directives(0),
            "aoc=warn,aoc_launcher=warn,aoc_solutions=warn"
        );
    }

    #[test]
    fn test_each_flag_raises_level() {
        assert_eq!(level(1), Level::INFO);
        assert_eq!(level(2), Level::DEBUG);
        assert_eq!(level(3), Level::TRACE);
        assert_eq!(level(u8::MAX), Level::TRACE);
        assert!(default_directives(2).starts_with("aoc=debug,"));
    }

    #[test]
    fn test_directives_parse() {
        for verbosity in 0..=3 {
            assert!(EnvFilter::try_new(default_directives(verbosity)).is_ok());
        }
    }
}
