//! Race Condition: a single racetrack where a program may phase through
//! walls once. Count the cheats that save enough time.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::utils::grid::{Coord, Grid};
use crate::utils::grid_path::{CostMap, cost_map};

pub struct Day20;

/// Puzzle parameters that differ between the example and the real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheatRules {
    /// Minimum saving (in picoseconds) for a cheat to be counted.
    pub min_saving: u32,
    /// Longest cheat allowed in part 1.
    pub short: usize,
    /// Longest cheat allowed in part 2.
    pub long: usize,
}

impl Default for CheatRules {
    fn default() -> Self {
        Self {
            min_saving: 100,
            short: 2,
            long: 20,
        }
    }
}

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    start: Coord,
    rules: CheatRules,
    costs: Option<CostMap>,
}

impl AocParser for Day20 {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid: Grid = input
            .trim()
            .parse()
            .map_err(|e| ParseError::InvalidFormat(format!("racetrack: {}", e)))?;
        let start = grid
            .start()
            .ok_or_else(|| ParseError::MissingData("start marker `S`".into()))?;
        if grid.goal().is_none() {
            return Err(ParseError::MissingData("end marker `E`".into()));
        }
        Ok(SharedData {
            grid,
            start,
            rules: CheatRules::default(),
            costs: None,
        })
    }
}

impl PartSolver<1> for Day20 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let CheatRules { min_saving, short, .. } = shared.rules;
        Ok(count_cheats(track_costs(shared)?, short, min_saving).to_string())
    }
}

impl PartSolver<2> for Day20 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let CheatRules { min_saving, long, .. } = shared.rules;
        Ok(count_cheats(track_costs(shared)?, long, min_saving).to_string())
    }
}

impl Solver for Day20 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn track_costs(shared: &mut SharedData) -> Result<&CostMap, SolveError> {
    if shared.costs.is_none() {
        let costs = cost_map(&shared.grid, shared.start)?;
        log::debug!("racetrack has {} reachable cells", costs.len());
        shared.costs = Some(costs);
    }
    shared
        .costs
        .as_ref()
        .ok_or_else(|| SolveError::NoAnswer("track costs missing".into()))
}

/// Count cheats of at most `max_cheat` moves that save at least `min_saving`.
///
/// A cheat leaves the track at `a` and rejoins at `b`, `d` moves away in
/// Manhattan distance. Its saving is `cost[b] - cost[a] - d`. Only forward
/// jumps (`cost[b] > cost[a] + d`) save time, so each cheat is counted once.
pub fn count_cheats(costs: &CostMap, max_cheat: usize, min_saving: u32) -> usize {
    costs
        .iter()
        .map(|(from, from_cost)| {
            within(from, max_cheat)
                .filter(|&(to, d)| {
                    costs
                        .get(to)
                        .is_some_and(|to_cost| to_cost >= from_cost + d + min_saving)
                })
                .count()
        })
        .sum()
}

/// Every coordinate within Manhattan distance `radius` of `center`, with its distance.
fn within(center: Coord, radius: usize) -> impl Iterator<Item = (Coord, u32)> {
    let r = radius as isize;
    (-r..=r).flat_map(move |dr| {
        let span = r - dr.abs();
        (-span..=span).filter_map(move |dc| {
            let row = center.row.checked_add_signed(dr)?;
            let col = center.col.checked_add_signed(dc)?;
            Some((Coord::new(row, col), (dr.abs() + dc.abs()) as u32))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_path::{PathCost, shortest_path};

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    fn example_costs() -> CostMap {
        let mut shared = Day20::parse(EXAMPLE).unwrap();
        track_costs(&mut shared).unwrap().clone()
    }

    #[test]
    fn test_baseline_time() {
        let shared = Day20::parse(EXAMPLE).unwrap();
        let goal = shared.grid.goal().unwrap();
        assert_eq!(
            shortest_path(&shared.grid, shared.start, goal).unwrap(),
            PathCost::Reachable(84)
        );
        assert_eq!(example_costs().get(goal), Some(84));
    }

    #[test]
    fn test_two_move_cheats() {
        let costs = example_costs();
        assert_eq!(count_cheats(&costs, 2, 64), 1);
        assert_eq!(count_cheats(&costs, 2, 20), 5);
        assert_eq!(count_cheats(&costs, 2, 1), 44);
    }

    #[test]
    fn test_twenty_move_cheats() {
        let costs = example_costs();
        assert_eq!(count_cheats(&costs, 20, 76), 3);
        assert_eq!(count_cheats(&costs, 20, 74), 7);
    }

    #[test]
    fn test_parts_use_rules() {
        let mut shared = Day20::parse(EXAMPLE).unwrap();
        shared.rules = CheatRules {
            min_saving: 50,
            ..CheatRules::default()
        };
        // Only the 64-saving cheat clears the bar with two moves.
        assert_eq!(Day20::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Day20::solve_part(&mut shared, 2).unwrap(), "285");
    }

    #[test]
    fn test_within_radius() {
        let around: Vec<_> = within(Coord::new(5, 5), 2).collect();
        assert_eq!(around.len(), 13);
        assert!(around.contains(&(Coord::new(5, 5), 0)));
        assert!(around.contains(&(Coord::new(3, 5), 2)));

        // Clipped at the top-left edge.
        assert_eq!(within(Coord::new(0, 0), 2).count(), 6);
    }

    #[test]
    fn test_missing_markers() {
        assert!(Day20::parse("#S.#\n").is_err());
        assert!(Day20::parse("#.E#\n").is_err());
    }
}
