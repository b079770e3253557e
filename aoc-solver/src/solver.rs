//! Core solver trait and answer type

use crate::error::SolveError;
use std::fmt;

/// Answer produced by a solving function
///
/// Puzzle answers are either a number or a piece of text. Integer types
/// convert into [`Answer::Number`]; values that do not fit an `i64` are kept
/// as their decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Numeric answer
    Number(i64),
    /// Textual answer
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! answer_from_lossless {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    Answer::Number(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! answer_from_wide {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Answer {
                fn from(value: $t) -> Self {
                    i64::try_from(value)
                        .map(Answer::Number)
                        .unwrap_or_else(|_| Answer::Text(value.to_string()))
                }
            }
        )*
    };
}

answer_from_lossless!(i8, i16, i32, i64, u8, u16, u32);
answer_from_wide!(u64, usize, isize, i128, u128);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Core trait every day solution implements.
///
/// A solution is a zero-sized type carrying its day number, two solving
/// functions and an optional embedded test fixture. Register it with
/// `#[derive(AutoRegisterSolver)]` or [`RegistryBuilder::register`](crate::RegistryBuilder::register).
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, SolveError, Solver};
///
/// struct Day1;
///
/// impl Solver for Day1 {
///     const DAY: u8 = 1;
///     const TEST_INPUT: Option<&'static str> = Some("1\n2\n3");
///     const EXPECTED_PART1: Option<&'static str> = Some("6");
///
///     fn part1(input: &str) -> Result<Answer, SolveError> {
///         let sum = input
///             .lines()
///             .map(|l| l.parse::<i64>().map_err(SolveError::failed))
///             .sum::<Result<i64, _>>()?;
///         Ok(sum.into())
///     }
///
///     fn part2(input: &str) -> Result<Answer, SolveError> {
///         Ok(input.lines().count().into())
///     }
/// }
///
/// assert_eq!(Day1::part1("1\n2\n3").unwrap(), Answer::Number(6));
/// ```
pub trait Solver {
    /// Day number (1-25)
    const DAY: u8;

    /// Small example input used by `--test` runs
    const TEST_INPUT: Option<&'static str> = None;

    /// Expected part 1 answer for [`Self::TEST_INPUT`]
    const EXPECTED_PART1: Option<&'static str> = None;

    /// Expected part 2 answer for [`Self::TEST_INPUT`]
    const EXPECTED_PART2: Option<&'static str> = None;

    /// Solve part 1
    fn part1(input: &str) -> Result<Answer, SolveError>;

    /// Solve part 2
    fn part2(input: &str) -> Result<Answer, SolveError>;
}

pub trait SolverExt: Solver {
    /// Dispatch to `part1`/`part2`, rejecting any other part number
    fn solve_part_checked_range(input: &str, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Self::part1(input),
            2 => Self::part2(input),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }

    /// Expected answer declared for a part, if any
    fn expected_answer(part: u8) -> Option<&'static str> {
        match part {
            1 => Self::EXPECTED_PART1,
            2 => Self::EXPECTED_PART2,
            _ => None,
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
