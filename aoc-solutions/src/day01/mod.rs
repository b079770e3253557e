//! Day 1: dial rotations

use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AutoRegisterSolver, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(tags = ["2025"])]
pub struct Day01;

impl Solver for Day01 {
    const DAY: u8 = 1;
    const TEST_INPUT: Option<&'static str> = Some("L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82");
    const EXPECTED_PART1: Option<&'static str> = Some("3");
    const EXPECTED_PART2: Option<&'static str> = Some("6");

    fn part1(input: &str) -> Result<Answer, SolveError> {
        let rotations = parse_rotations(input).map_err(SolveError::failed)?;
        Ok(count_zeros(&rotations).landed_on_zero.into())
    }

    fn part2(input: &str) -> Result<Answer, SolveError> {
        let rotations = parse_rotations(input).map_err(SolveError::failed)?;
        Ok(count_zeros(&rotations).passed_zero.into())
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ZeroCounts {
    landed_on_zero: u32,
    passed_zero: u32,
}

/// Parse `L<n>` / `R<n>` lines into signed rotations
fn parse_rotations(input: &str) -> anyhow::Result<Vec<i32>> {
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            let negative = match line.as_bytes().first() {
                Some(b'L') => true,
                Some(b'R') => false,
                _ => return Err(anyhow!("(line {}) first character need to be 'L' or 'R'", line_idx + 1)),
            };
            let value: i32 = line[1..]
                .parse()
                .with_context(|| format!("(line {}) invalid rotation value", line_idx + 1))?;
            if value < 0 {
                return Err(anyhow!("(line {}) rotate value must be non negative", line_idx + 1));
            }
            Ok(if negative { -value } else { value })
        })
        .collect()
}

/// Turn a 100-position dial starting at 50 and count visits to zero
fn count_zeros(rotations: &[i32]) -> ZeroCounts {
    let (_, landed_on_zero, passed_zero) = rotations.iter().fold(
        (50i32, 0u32, 0u32),
        |(mut dial, mut landed, mut passed), rotation| {
            let old_dial = dial;
            dial += rotation;
            if dial <= 0 && old_dial != 0 {
                passed += 1;
            }
            passed += (dial / 100).unsigned_abs();
            dial = dial.rem_euclid(100);
            if dial == 0 {
                landed += 1;
            }
            (dial, landed, passed)
        },
    );

    ZeroCounts {
        landed_on_zero,
        passed_zero,
    }
}

#[cfg(test)]
mod tests;
