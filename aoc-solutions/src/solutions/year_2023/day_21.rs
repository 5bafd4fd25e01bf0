//! Step Counter: which garden plots can the elf stand on after exactly
//! `n` steps?
//!
//! A plot at distance `d` is an exact-`n` destination iff `d <= n` and
//! `d` has the same parity as `n`, since the elf can always step back and
//! forth to burn two steps.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::utils::grid::{Coord, Grid};
use crate::utils::grid_path::{CostMap, cost_map};

pub struct Day21;

/// Step counts for both parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounts {
    pub garden: u64,
    pub tiled: u64,
}

impl Default for StepCounts {
    fn default() -> Self {
        Self {
            garden: 64,
            tiled: 26_501_365,
        }
    }
}

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    start: Coord,
    steps: StepCounts,
    costs: Option<CostMap>,
}

impl AocParser for Day21 {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid: Grid = input
            .trim()
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("garden map: {}", e)))?;
        let start = grid
            .start()
            .ok_or_else(|| ParseError::MissingData("start marker `S`".into()))?;
        Ok(SharedData {
            grid,
            start,
            steps: StepCounts::default(),
            costs: None,
        })
    }
}

impl PartSolver<1> for Day21 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let steps = shared.steps.garden;
        Ok(plots_within(plot_costs(shared)?, steps).to_string())
    }
}

impl PartSolver<2> for Day21 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (height, width, start) = (shared.grid.height(), shared.grid.width(), shared.start);
        let steps = shared.steps.tiled;
        let costs = plot_costs(shared)?;
        plots_on_tiled_map(costs, height, width, start, steps).map(|n| n.to_string())
    }
}

impl Solver for Day21 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn plot_costs(shared: &mut SharedData) -> Result<&CostMap, SolveError> {
    if shared.costs.is_none() {
        shared.costs = Some(cost_map(&shared.grid, shared.start)?);
    }
    shared
        .costs
        .as_ref()
        .ok_or_else(|| SolveError::NoAnswer("plot costs missing".into()))
}

/// Plots reachable in exactly `steps` steps on a single map.
pub fn plots_within(costs: &CostMap, steps: u64) -> usize {
    costs
        .iter()
        .filter(|&(_, cost)| {
            let cost = u64::from(cost);
            cost <= steps && cost % 2 == steps % 2
        })
        .count()
}

/// Plots reachable in exactly `steps` steps when the map repeats forever.
///
/// Relies on the shape of real puzzle inputs: a square map of odd side with
/// the start in the middle, clear lanes through the start row and column,
/// and `steps` ending exactly on a map edge. The reachable area is then a
/// diamond of `n` whole maps in every direction, built from full maps of
/// both parities plus or minus the corners beyond `size / 2` steps.
pub fn plots_on_tiled_map(
    costs: &CostMap,
    height: usize,
    width: usize,
    start: Coord,
    steps: u64,
) -> Result<u64, SolveError> {
    if height != width || height % 2 == 0 {
        return Err(SolveError::NoAnswer(format!(
            "tiling needs an odd square map, got {}x{}",
            height, width
        )));
    }
    let half = height / 2;
    if start != Coord::new(half, half) {
        return Err(SolveError::NoAnswer(format!(
            "tiling needs the start at the center, got {}",
            start
        )));
    }

    let (size, half) = (height as u64, half as u64);
    if steps < half || (steps - half) % size != 0 {
        return Err(SolveError::NoAnswer(format!(
            "{} steps do not end on a map edge",
            steps
        )));
    }
    let n = (steps - half) / size;

    // The (n + 1)² group of maps shares the parity of `size / 2`.
    let q = half % 2;
    let full = |parity: u64| costs.iter().filter(|&(_, c)| u64::from(c) % 2 == parity).count() as u64;
    let corners = |parity: u64| {
        costs
            .iter()
            .filter(|&(_, c)| u64::from(c) > half && u64::from(c) % 2 == parity)
            .count() as u64
    };

    log::debug!("tiled garden: {} map widths out, start parity {}", n, q);
    Ok((n + 1) * (n + 1) * full(q) + n * n * full(1 - q) + n * corners(1 - q)
        - (n + 1) * corners(q))
}
