//! Advent of Code Solver Library
//!
//! Trait contract and plumbing shared by the puzzle solutions:
//! - [`AocParser`] turns raw input into shared data
//! - [`PartSolver`] solves one part against that data
//! - [`Solver`] dispatches a runtime part number
//! - [`SolverInstance`] / [`DynSolver`] wrap a parsed puzzle with parse and solve timing
//! - [`SolverTable`] looks solvers up by year and day from a static entry list
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, DynSolver, ParseError, PartSolver, SolveError, Solver, SolverInstance};
//!
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("Expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(shared),
//!             _ => Err(SolveError::PartOutOfRange(part)),
//!         }
//!     }
//! }
//!
//! let mut solver = SolverInstance::<Day1>::new("1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert!(solver.solve(2).is_err());
//! ```

mod error;
mod instance;
mod solver;
mod table;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
pub use table::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, SolverEntry, SolverFactory, SolverTable,
};
