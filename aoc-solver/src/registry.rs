//! Solver registry mapping day numbers to registered solutions

use crate::error::{RegistrationError, SolverError};
use crate::instance::DynSolver;

/// Days per Advent of Code event (1-25)
pub const DAYS_PER_YEAR: usize = 25;

/// Calculate flat index from a day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS_PER_YEAR {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct the day from a flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

/// Plugin information for automatic solver registration
///
/// Submitted through `inventory::submit!`, normally by
/// `#[derive(AutoRegisterSolver)]`.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{Answer, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     const DAY: u8 = 1;
///
///     fn part1(_: &str) -> Result<Answer, SolveError> {
///         Ok(0.into())
///     }
///
///     fn part2(_: &str) -> Result<Answer, SolveError> {
///         Ok(0.into())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn DynSolver,
    /// Optional tags for filtering (e.g., "easy", "wip")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Builder for constructing a [`SolverRegistry`]
///
/// Detects duplicate days and out-of-range days at registration time, so the
/// built registry holds at most one solution per day.
///
/// # Example
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: [Option<&'static dyn DynSolver>; DAYS_PER_YEAR],
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: [None; DAYS_PER_YEAR],
        }
    }

    /// Register a solution under the day it reports
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError::InvalidDay)` - Day outside 1-25
    /// * `Err(RegistrationError::DuplicateSolver)` - Day already registered
    pub fn register(mut self, solver: &'static dyn DynSolver) -> Result<Self, RegistrationError> {
        let day = solver.day();
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        tracing::debug!(day, "registered solver");
        self.entries[index] = Some(solver);
        Ok(self)
    }

    /// Register all collected solver plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Skip solutions still marked as work in progress
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| !plugin.tags.contains(&"wip"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if plugin.day != plugin.solver.day() {
                return Err(RegistrationError::InvalidDay(plugin.day));
            }
            if filter(plugin) {
                self = self.register(plugin.solver)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up solutions by day
pub struct SolverRegistry {
    entries: [Option<&'static dyn DynSolver>; DAYS_PER_YEAR],
}

impl SolverRegistry {
    /// Look up the solution registered for a day
    ///
    /// # Returns
    /// * `Ok(&dyn DynSolver)` - The registered solution
    /// * `Err(SolverError::NotFound)` - Nothing registered (or day out of range)
    pub fn get(&self, day: u8) -> Result<&'static dyn DynSolver, SolverError> {
        calc_index(day)
            .and_then(|i| self.entries[i])
            .ok_or(SolverError::NotFound(day))
    }

    /// Check if a solution exists for a day
    pub fn contains(&self, day: u8) -> bool {
        self.get(day).is_ok()
    }

    /// Iterate over registered days in ascending order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_some())
            .map(|(i, _)| from_index(i))
    }

    /// Get the number of registered solutions
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Answer, SolveError, Solver};

    struct Day3;

    impl Solver for Day3 {
        const DAY: u8 = 3;

        fn part1(input: &str) -> Result<Answer, SolveError> {
            Ok(input.len().into())
        }

        fn part2(_input: &str) -> Result<Answer, SolveError> {
            Ok("two".into())
        }
    }

    struct AlsoDay3;

    impl Solver for AlsoDay3 {
        const DAY: u8 = 3;

        fn part1(_input: &str) -> Result<Answer, SolveError> {
            Ok(0.into())
        }

        fn part2(_input: &str) -> Result<Answer, SolveError> {
            Ok(0.into())
        }
    }

    struct Day26;

    impl Solver for Day26 {
        const DAY: u8 = 26;

        fn part1(_input: &str) -> Result<Answer, SolveError> {
            Ok(0.into())
        }

        fn part2(_input: &str) -> Result<Answer, SolveError> {
            Ok(0.into())
        }
    }

    #[test]
    fn test_register_and_get() {
        let registry = RegistryBuilder::new().register(&Day3).unwrap().build();

        let solver = registry.get(3).unwrap();
        assert_eq!(solver.day(), 3);
        assert_eq!(solver.solve(1, "abcd").unwrap().answer, Answer::Number(4));
        assert_eq!(solver.solve(2, "").unwrap().answer, Answer::from("two"));
        assert_eq!(registry.days().collect::<Vec<_>>(), vec![3]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_day_rejected() {
        let result = RegistryBuilder::new()
            .register(&Day3)
            .unwrap()
            .register(&AlsoDay3);
        assert_eq!(result.err(), Some(RegistrationError::DuplicateSolver(3)));
    }

    #[test]
    fn test_invalid_day_rejected() {
        let result = RegistryBuilder::new().register(&Day26);
        assert_eq!(result.err(), Some(RegistrationError::InvalidDay(26)));
    }

    #[test]
    fn test_missing_day_not_found() {
        let registry = RegistryBuilder::new().register(&Day3).unwrap().build();

        assert!(matches!(registry.get(4), Err(SolverError::NotFound(4))));
        assert!(matches!(registry.get(0), Err(SolverError::NotFound(0))));
        assert!(!registry.contains(26));
    }

    #[test]
    fn test_part_out_of_range() {
        let result = Day3.solve(3, "");
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }
}
