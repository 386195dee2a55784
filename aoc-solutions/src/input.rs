//! Puzzle input lookup
//!
//! Inputs live at `{dir}/{year}/day_{day:02}.txt`, where `dir` comes from
//! `AOC_INPUT_DIR` and defaults to `inputs`.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
const DEFAULT_INPUT_DIR: &str = "inputs";

/// Base directory for puzzle inputs
pub fn input_dir() -> PathBuf {
    std::env::var_os(INPUT_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
}

/// Path of the input file for a year/day under `base`
pub fn input_path(base: &Path, year: u16, day: u8) -> PathBuf {
    base.join(year.to_string())
        .join(format!("day_{:02}.txt", day))
}

/// Read the input for a year/day from `base`
pub fn read_from(base: &Path, year: u16, day: u8) -> anyhow::Result<String> {
    let path = input_path(base, year, day);
    debug!(path = %path.display(), "reading input");
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read input for {}/day{:02} from {}", year, day, path.display()))
}

/// Read the input for a year/day from the configured input directory
pub fn read(year: u16, day: u8) -> anyhow::Result<String> {
    read_from(&input_dir(), year, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let path = input_path(Path::new("inputs"), 2025, 1);
        assert_eq!(path, Path::new("inputs").join("2025").join("day_01.txt"));

        let path = input_path(Path::new("/tmp/aoc"), 2023, 25);
        assert!(path.to_string_lossy().ends_with("day_25.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let path = input_path(temp.path(), 2025, 1);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "L68\nR48\n").unwrap();

        assert_eq!(read_from(temp.path(), 2025, 1).unwrap(), "L68\nR48\n");
    }

    #[test]
    fn test_missing_input_names_the_file() {
        let temp = TempDir::new().unwrap();
        let err = read_from(temp.path(), 2025, 3).unwrap_err();
        assert!(err.to_string().contains("2025/day03"), "{err}");
    }
}
