//! Uniform-cost shortest paths over a [`Grid`].
//!
//! Every orthogonal move between two non-blocked cells costs 1. The frontier
//! is a binary min-heap without decrease-key: stale entries stay in the heap
//! and are dropped when popped, since a coordinate is finalized the first
//! time it comes off the heap.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::grid::Grid;
//! use aoc_solutions::utils::grid_path::{shortest_path, PathCost};
//!
//! let grid: Grid = "S.#\n#..\n..E".parse().unwrap();
//! let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
//!
//! assert_eq!(shortest_path(&grid, start, goal).unwrap(), PathCost::Reachable(4));
//! ```

use std::cmp::Reverse;
use std::collections::hash_map::{self, HashMap};
use std::collections::BinaryHeap;

use thiserror::Error;

use super::grid::{Coord, Grid};

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

/// Caller errors, raised before any search work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridPathError {
    #[error("invalid endpoint {at}: {fault:?}")]
    InvalidEndpoint { at: Coord, fault: EndpointFault },
}

/// Outcome of a single-pair search. An unreachable goal is a normal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathCost {
    Reachable(u32),
    NotReachable,
}

impl PathCost {
    pub fn cost(self) -> Option<u32> {
        match self {
            PathCost::Reachable(c) => Some(c),
            PathCost::NotReachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, PathCost::Reachable(_))
    }
}

/// Finalized shortest costs from one start cell.
///
/// Only reachable, non-blocked coordinates have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostMap {
    costs: HashMap<Coord, u32>,
}

impl CostMap {
    pub fn get(&self, at: Coord) -> Option<u32> {
        self.costs.get(&at).copied()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.costs.contains_key(&at)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// `(coordinate, cost)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        self.costs.iter().map(|(&at, &cost)| (at, cost))
    }
}

impl<'a> IntoIterator for &'a CostMap {
    type Item = (&'a Coord, &'a u32);
    type IntoIter = hash_map::Iter<'a, Coord, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.costs.iter()
    }
}

/// Minimum number of moves from `start` to `goal`.
///
/// Stops as soon as `goal` is finalized.
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Result<PathCost, GridPathError> {
    check_endpoint(grid, start)?;
    check_endpoint(grid, goal)?;

    let costs = search(grid, start, Some(goal));
    Ok(costs
        .get(goal)
        .map_or(PathCost::NotReachable, PathCost::Reachable))
}

/// Shortest cost from `start` to every reachable cell.
pub fn cost_map(grid: &Grid, start: Coord) -> Result<CostMap, GridPathError> {
    check_endpoint(grid, start)?;
    Ok(search(grid, start, None))
}

fn check_endpoint(grid: &Grid, at: Coord) -> Result<(), GridPathError> {
    let fault = if !grid.contains(at) {
        EndpointFault::OutOfBounds
    } else if grid.is_blocked(at) {
        EndpointFault::Blocked
    } else {
        return Ok(());
    };
    Err(GridPathError::InvalidEndpoint { at, fault })
}

fn search(grid: &Grid, start: Coord, goal: Option<Coord>) -> CostMap {
    let mut costs = HashMap::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0u32, start)));
    let mut popped = 0usize;

    while let Some(Reverse((cost, at))) = frontier.pop() {
        popped += 1;
        let hash_map::Entry::Vacant(slot) = costs.entry(at) else {
            // Already finalized at a cost <= this one.
            continue;
        };
        slot.insert(cost);

        if goal == Some(at) {
            break;
        }

        for next in grid.neighbors(at) {
            frontier.push(Reverse((cost + 1, next)));
        }
    }

    log::trace!(
        "grid search from {}: {} finalized, {} popped, {} left in frontier",
        start,
        costs.len(),
        popped,
        frontier.len()
    );
    CostMap { costs }
}

#[cfg(test)]
mod tests;
