//! Shared building blocks for the puzzle solutions.

pub mod dp_cache;
pub mod grid;
pub mod grid_path;

use aoc_solver::SolveError;

impl From<grid::GridError> for SolveError {
    fn from(e: grid::GridError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}

impl From<grid_path::GridPathError> for SolveError {
    fn from(e: grid_path::GridPathError) -> Self {
        SolveError::SolveFailed(Box::new(e))
    }
}
