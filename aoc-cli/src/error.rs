//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Some parts failed; each was already reported
    #[error("{0} part(s) failed")]
    Failures(usize),
}

/// Why an input could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input file {} not found", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },
}

/// Failure of a single year/day/part run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),
}
