//! Parsed puzzles with wall-clock timing around parse and solve

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamps taken around one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    /// Run `step`, recording when it started and finished.
    pub fn measure<T, E>(step: impl FnOnce() -> Result<T, E>) -> Result<(T, Span), E> {
        let start = Utc::now();
        let value = step()?;
        Ok((
            value,
            Span {
                start,
                end: Utc::now(),
            },
        ))
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Answer for one part and the time spent on it
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Shared data for one input, parsed once and solved part by part
pub struct SolverInstance<'a, S: Solver> {
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse(input))?;
        Ok(Self { shared, parsed })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the solver table
pub trait DynSolver {
    /// Solve one part. Parts outside `1..=PARTS` fail with
    /// [`SolveError::PartOutOfRange`].
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_duration(&self) -> TimeDelta;
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let shared = &mut self.shared;
        let (answer, span) = Span::measure(|| S::solve_part_checked_range(shared, part))?;
        Ok(SolveResult { answer, span })
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parsed.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_orders_timestamps() {
        let (value, span) = Span::measure(|| Ok::<_, ()>(7)).unwrap();
        assert_eq!(value, 7);
        assert!(span.end >= span.start);
        assert!(span.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_measure_passes_error_through() {
        let result = Span::measure(|| Err::<u8, _>("bad input"));
        assert_eq!(result, Err("bad input"));
    }
}
