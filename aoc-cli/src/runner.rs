//! Sequential runner over the selected solvers

use crate::config::Config;
use crate::error::RunError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverTable};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single part
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, RunError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl RunResult {
    fn failed(year: u16, day: u8, part: u8, error: RunError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Runner {
    table: SolverTable,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
    tags: Vec<String>,
}

impl Runner {
    pub fn new(table: SolverTable, inputs: InputStore, config: &Config) -> Self {
        Self {
            table,
            inputs,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
            tags: config.tags.clone(),
        }
    }

    /// Collect work items by filtering table metadata, ordered by year then day
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.table
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .filter(|info| self.tags.iter().all(|tag| info.tags.contains(&tag.as_str())))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: select_parts(self.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Run every work item in order, handing each part's result to `emit`
    ///
    /// A failing input or parse is reported once per selected part and the
    /// run moves on.
    pub fn run(&self, work_items: &[WorkItem], mut emit: impl FnMut(RunResult)) {
        for work in work_items {
            self.run_solver(work, &mut emit);
        }
    }

    fn run_solver(&self, work: &WorkItem, emit: &mut impl FnMut(RunResult)) {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                for part in work.parts.clone() {
                    emit(RunResult::failed(year, day, part, e.clone().into()));
                }
                return;
            }
        };

        let mut solver = match self.table.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(SolverError::ParseError(e)) => {
                log::debug!("{}/{:02} parse failed: {}", year, day, e);
                for part in work.parts.clone() {
                    let error = SolverError::ParseError(e.clone());
                    emit(RunResult::failed(year, day, part, error.into()));
                }
                return;
            }
            Err(e) => {
                emit(RunResult::failed(year, day, *work.parts.start(), e.into()));
                return;
            }
        };

        for part in work.parts.clone() {
            emit(solve_part(year, day, part, &mut *solver));
        }
    }
}

/// Parts to run for a solver with `max_parts` parts
#[allow(clippy::reversed_empty_ranges)]
fn select_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if (1..=max_parts).contains(&p) => p..=p,
        Some(_) => 1..=0, // Empty range - intentional
        None => 1..=max_parts,
    }
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> RunResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => RunResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => RunResult {
            parse_duration,
            ..RunResult::failed(year, day, part, RunError::Solver(e.into()))
        },
    }
}
