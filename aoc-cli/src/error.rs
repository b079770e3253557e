//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Every variant is fatal: `main` prints it and exits with status 1.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No solution registered for the requested day
    #[error("Solution for day {0} not found!\n   Run: aoc scaffold {0}")]
    SolutionNotFound(u8),

    /// `--test` requested but the solution has no embedded test input
    #[error("No test input defined in solution for day {0}!")]
    TestInputMissing(u8),

    /// Puzzle input could not be obtained
    #[error(transparent)]
    Input(#[from] InputError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Solving function failed
    #[error("Solver error: {0}")]
    Solve(#[from] aoc_solver::SolveError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Scaffolding error
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
}

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Mandatory variable absent or empty
    #[error("{var} is missing! {hint}")]
    Missing { var: &'static str, hint: &'static str },

    /// Variable present but unusable
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}

/// Input provider errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading or writing the cache failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// Remote fetch failed (missing credential, bad status, network)
    #[error("Input fetch failed for day {day}: {source}")]
    Fetch {
        day: u8,
        #[source]
        source: aoc_http_client::AocError,
    },
}

/// Scaffolder errors
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Day outside 1-25
    #[error("Day must be between 1 and 25 (got {0})")]
    InvalidDay(u8),

    /// Target directory is already there; nothing was written
    #[error("Directory {} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
