//! Advent of Code puzzle solutions built on grid shortest paths
//!
//! - [`utils::grid`]: rectangular grids of open and blocked cells
//! - [`utils::grid_path`]: uniform-cost search over a grid
//! - [`utils::dp_cache`]: memoized recursion over a dependency DAG
//! - [`solutions`]: the puzzles themselves, listed in [`SOLVERS`]
//!
//! # Example
//!
//! ```
//! let table = aoc_solutions::table().unwrap();
//! let mut solver = table.create_solver(2024, 19, "a, aa\n\naaaa\n").unwrap();
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```

pub mod solutions;
pub mod utils;

use aoc_solver::{RegistrationError, SolverEntry, SolverTable};

use solutions::{year_2023, year_2024};

/// Every solver in this crate.
pub static SOLVERS: &[SolverEntry] = &[
    SolverEntry::new::<year_2023::day_21::Day21>(2023, 21, &["grid-path", "tiling"]),
    SolverEntry::new::<year_2024::day_18::Day18>(2024, 18, &["grid-path", "bisection"]),
    SolverEntry::new::<year_2024::day_19::Day19>(2024, 19, &["memo"]),
    SolverEntry::new::<year_2024::day_20::Day20>(2024, 20, &["grid-path"]),
];

/// Lookup table over [`SOLVERS`].
pub fn table() -> Result<SolverTable, RegistrationError> {
    SolverTable::new(SOLVERS)
}
