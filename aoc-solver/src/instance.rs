//! Type-erased solver interface

use crate::error::SolveError;
use crate::solver::{Answer, Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer
    pub answer: Answer,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// Every [`Solver`] that is `Sync` implements this trait through a blanket
/// impl, which is what lets the registry hold `&'static dyn DynSolver`
/// entries for unrelated solution types.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(solver: &dyn DynSolver, input: &str) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve(1, input)?;
///     println!("Day {} part 1: {} (took {:?})", solver.day(), result.answer, result.duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver: Sync {
    /// Solve the specified part with timing around the solving call only
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError::PartOutOfRange)` - Part is neither 1 nor 2
    /// * `Err(SolveError::SolveFailed)` - The solving function failed
    fn solve(&self, part: u8, input: &str) -> Result<SolveResult, SolveError>;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Embedded test fixture, if the solution defines one
    fn test_input(&self) -> Option<&'static str>;

    /// Expected answer for a part when run on the test fixture
    fn expected(&self, part: u8) -> Option<&'static str>;
}

impl<S> DynSolver for S
where
    S: Solver + Sync,
{
    fn solve(&self, part: u8, input: &str) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(input, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn day(&self) -> u8 {
        S::DAY
    }

    fn test_input(&self) -> Option<&'static str> {
        S::TEST_INPUT
    }

    fn expected(&self, part: u8) -> Option<&'static str> {
        S::expected_answer(part)
    }
}
