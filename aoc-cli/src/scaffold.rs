//! Generates the boilerplate for a new day's solution

use crate::error::ScaffoldError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where `dayNN` modules live, relative to the workspace root
pub const DEFAULT_SOLUTIONS_DIR: &str = "aoc-solutions/src";

/// Files written by [`scaffold`]
#[derive(Debug)]
pub struct ScaffoldOutput {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Create `<solutions_dir>/dayNN/` with a solution stub and its tests
///
/// Refuses to touch an existing directory. The solutions crate discovers the
/// new module at build time, so nothing else needs editing.
pub fn scaffold(solutions_dir: &Path, day: u8) -> Result<ScaffoldOutput, ScaffoldError> {
    if !(1..=25).contains(&day) {
        return Err(ScaffoldError::InvalidDay(day));
    }

    let dir = solutions_dir.join(format!("day{:02}", day));
    if dir.exists() {
        return Err(ScaffoldError::AlreadyExists(dir));
    }

    tracing::info!(day, dir = %dir.display(), "scaffolding");
    fs::create_dir_all(&dir)?;

    let files = vec![
        write_new(&dir.join("mod.rs"), &solution_template(day))?,
        write_new(&dir.join("tests.rs"), &test_template(day))?,
    ];

    Ok(ScaffoldOutput { dir, files })
}

/// Write a file that must not exist yet
fn write_new(path: &Path, contents: &str) -> Result<PathBuf, ScaffoldError> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path.to_path_buf())
}

fn solution_template(day: u8) -> String {
    format!(
        r#"//! Day {day}

use aoc_solver::{{Answer, AutoRegisterSolver, SolveError, Solver}};

#[derive(AutoRegisterSolver)]
pub struct Day{day:02};

impl Solver for Day{day:02} {{
    const DAY: u8 = {day};
    const TEST_INPUT: Option<&'static str> = None;

    fn part1(input: &str) -> Result<Answer, SolveError> {{
        let _lines: Vec<&str> = input.lines().collect();
        Ok(Answer::Number(0))
    }}

    fn part2(_input: &str) -> Result<Answer, SolveError> {{
        Ok(Answer::Number(0))
    }}
}}

#[cfg(test)]
mod tests;
"#
    )
}

fn test_template(day: u8) -> String {
    format!(
        r#"use super::*;

const TEST_INPUT: &str = "";

#[test]
fn part1() {{
    assert_eq!(Day{day:02}::part1(TEST_INPUT).unwrap(), Answer::Number(0));
}}

#[test]
fn part2() {{
    assert_eq!(Day{day:02}::part2(TEST_INPUT).unwrap(), Answer::Number(0));
}}
"#
    )
}
