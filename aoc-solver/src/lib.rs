//! Advent of Code Solver Library
//!
//! The contract between the runner and the per-day solutions of a single
//! Advent of Code event. Each day is a type implementing [`Solver`]: two
//! solving functions over the raw puzzle input, plus an optional embedded
//! test fixture and expected answers.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Solver`] trait and the [`Answer`] type solving functions return
//! - [`DynSolver`], a type-erased view with timed solving
//! - A day-indexed registry populated at link time through [`SolverPlugin`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, RegistryBuilder, SolveError, Solver};
//!
//! struct Day1;
//!
//! impl Solver for Day1 {
//!     const DAY: u8 = 1;
//!     const TEST_INPUT: Option<&'static str> = Some("abc");
//!
//!     fn part1(input: &str) -> Result<Answer, SolveError> {
//!         Ok(input.len().into())
//!     }
//!
//!     fn part2(input: &str) -> Result<Answer, SolveError> {
//!         Ok(input.to_uppercase().into())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register(&Day1).unwrap().build();
//!
//! let solver = registry.get(1).unwrap();
//! let result = solver.solve(1, solver.test_input().unwrap()).unwrap();
//! assert_eq!(result.answer, Answer::Number(3));
//! ```
//!
//! # Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolver)]` to register a solution automatically:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(tags = ["easy"])]
//! struct Day1;
//! ```
//! and build the registry with [`RegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult};
pub use registry::{DAYS_PER_YEAR, RegistryBuilder, SolverPlugin, SolverRegistry};
pub use solver::{Answer, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolver;
