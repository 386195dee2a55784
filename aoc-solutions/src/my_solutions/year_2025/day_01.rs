use crate::input;
use anyhow::{Context, bail};
use aoc_launcher::{AutoRegisterUnit, BehaviorError, PartBehavior};

#[derive(AutoRegisterUnit)]
#[aoc(year = 2025, day = 1, name = "Secret Entrance")]
pub struct Day01;

/// Clicks that ended on zero, and clicks that touched zero at any point
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    landed: u32,
    passed: u32,
}

impl PartBehavior<1> for Day01 {
    fn run() -> Result<(), BehaviorError> {
        let rotations = parse(&input::read(2025, 1)?)?;
        println!("{}", spin(&rotations).landed);
        Ok(())
    }
}

impl PartBehavior<2> for Day01 {
    fn run() -> Result<(), BehaviorError> {
        let rotations = parse(&input::read(2025, 1)?)?;
        println!("{}", spin(&rotations).passed);
        Ok(())
    }
}

fn parse(input: &str) -> anyhow::Result<Vec<i32>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_rotation(line).with_context(|| format!("(line {})", idx + 1)))
        .collect()
}

fn parse_rotation(line: &str) -> anyhow::Result<i32> {
    let (direction, steps) = line.split_at_checked(1).unwrap_or((line, ""));
    let sign = match direction {
        "L" => -1,
        "R" => 1,
        _ => bail!("first character need to be 'L' or 'R'"),
    };
    Ok(sign * i32::from(steps.parse::<u16>()?))
}

/// Dial of 100 positions starting at 50
fn spin(rotations: &[i32]) -> Tally {
    let mut dial = 50i32;
    let mut tally = Tally::default();
    for &steps in rotations {
        let end = dial + steps;
        // multiples of 100 in the half-open range walked over, excluding the start
        let crossed = if steps >= 0 {
            end.div_euclid(100) - dial.div_euclid(100)
        } else {
            (dial - 1).div_euclid(100) - (end - 1).div_euclid(100)
        };
        tally.passed += crossed.unsigned_abs();
        dial = end.rem_euclid(100);
        if dial == 0 {
            tally.landed += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() {
        let rotations = parse(EXAMPLE).unwrap();
        assert_eq!(
            spin(&rotations),
            Tally {
                landed: 3,
                passed: 6
            }
        );
    }

    #[test]
    fn test_full_turns_from_zero() {
        let rotations = parse("L50\nL100\nR250").unwrap();
        assert_eq!(
            spin(&rotations),
            Tally {
                landed: 2,
                passed: 4
            }
        );
    }

    #[test]
    fn test_large_rotation_does_not_overflow() {
        let rotations = parse("R32767").unwrap();
        assert_eq!(
            spin(&rotations),
            Tally {
                landed: 0,
                passed: 328
            }
        );
        let rotations = parse(&"R65535\n".repeat(1000)).unwrap();
        assert_eq!(spin(&rotations).passed, 655_350);
    }

    #[test]
    fn test_bad_direction_reports_line() {
        let err = parse("R1\nX5\n").unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "(line 2): first character need to be 'L' or 'R'"
        );
    }

    #[test]
    fn test_negative_steps_rejected() {
        assert!(parse("R-5").is_err());
    }
}
