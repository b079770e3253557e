//! Runs one part of one day: solution lookup, input, timed solve

use crate::cli::RunRequest;
use crate::error::CliError;
use crate::output::OutputFormatter;
use crate::provider::{InputProvider, InputSource};
use aoc_solver::{SolveResult, SolverRegistry};
use std::borrow::Cow;

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    /// Answer plus timing of the solving call
    pub result: SolveResult,
    /// `None` when the embedded test input was used
    pub input_source: Option<InputSource>,
    /// Expected answer declared by the solution, test runs only
    pub expected: Option<&'static str>,
}

impl RunOutcome {
    /// Compare against the declared expected answer, if there is one
    pub fn matches_expected(&self) -> Option<bool> {
        self.expected
            .map(|expected| self.result.answer.to_string() == expected)
    }
}

/// Composes registry lookup, input acquisition and solving
///
/// Stops at the first failing stage; nothing is retried.
pub struct Runner<'a> {
    registry: &'a SolverRegistry,
    provider: &'a InputProvider,
    output: &'a OutputFormatter,
}

impl<'a> Runner<'a> {
    pub fn new(
        registry: &'a SolverRegistry,
        provider: &'a InputProvider,
        output: &'a OutputFormatter,
    ) -> Self {
        Self {
            registry,
            provider,
            output,
        }
    }

    /// Execute a validated request
    pub fn run(&self, request: &RunRequest) -> Result<RunOutcome, CliError> {
        let day = request.day;
        let solver = self
            .registry
            .get(day)
            .map_err(|_| CliError::SolutionNotFound(day))?;

        let (input, input_source) = if request.use_test_input {
            let text = solver.test_input().ok_or(CliError::TestInputMissing(day))?;
            (Cow::Borrowed(text), None)
        } else {
            let input = self.provider.get_input(day)?;
            (Cow::Owned(input.text), Some(input.source))
        };
        self.output.print_input_source(input_source.as_ref());

        self.output.print_running();
        tracing::debug!(day, part = request.part, bytes = input.len(), "solving");
        let result = solver.solve(request.part, &input)?;

        let expected = if request.use_test_input {
            solver.expected(request.part)
        } else {
            None
        };

        Ok(RunOutcome {
            result,
            input_source,
            expected,
        })
    }
}
