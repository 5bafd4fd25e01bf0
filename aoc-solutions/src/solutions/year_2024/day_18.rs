//! RAM Run: bytes fall onto a square memory grid; walk from the top-left
//! corner to the bottom-right one.

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::utils::grid::{Coord, Grid};
use crate::utils::grid_path::{PathCost, shortest_path};

pub struct Day18;

/// Puzzle parameters that differ between the example and the real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySpace {
    /// Largest coordinate on both axes; the grid is `(size + 1)²`.
    pub size: usize,
    /// Bytes that have fallen before part 1 walks the grid.
    pub fallen: usize,
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self {
            size: 70,
            fallen: 1024,
        }
    }
}

impl MemorySpace {
    fn exit(self) -> Coord {
        Coord::new(self.size, self.size)
    }
}

#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Coord>,
    space: MemorySpace,
}

impl AocParser for Day18 {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_bytes(input).map(|bytes| SharedData {
            bytes,
            space: MemorySpace::default(),
        })
    }
}

/// Parse `x,y` lines into `(row = y, col = x)` coordinates.
pub fn parse_bytes(input: &str) -> Result<Vec<Coord>, ParseError> {
    input
        .trim()
        .lines()
        .map(|line| -> Result<Coord, anyhow::Error> {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("expected `x,y`, got {:?}", line))?;
            let col = x.trim().parse::<usize>().context("bad x")?;
            let row = y.trim().parse::<usize>().context("bad y")?;
            Ok(Coord::new(row, col))
        })
        .enumerate()
        .map(|(line_idx, res)| {
            res.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
        })
        .collect()
}

impl PartSolver<1> for Day18 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match min_steps(&shared.bytes, shared.space)? {
            PathCost::Reachable(steps) => Ok(steps.to_string()),
            PathCost::NotReachable => Err(SolveError::NoAnswer(format!(
                "exit unreachable after {} bytes",
                shared.space.fallen
            ))),
        }
    }
}

impl PartSolver<2> for Day18 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_blocking_byte(&shared.bytes, shared.space)?
            .map(|at| format!("{},{}", at.col, at.row))
            .ok_or_else(|| SolveError::NoAnswer("exit is never cut off".into()))
    }
}

impl Solver for Day18 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

/// Shortest walk to the exit once `space.fallen` bytes are down.
pub fn min_steps(bytes: &[Coord], space: MemorySpace) -> Result<PathCost, SolveError> {
    let fallen = &bytes[..space.fallen.min(bytes.len())];
    walk(bytes_grid(fallen, space)?, space)
}

/// The first byte whose fall leaves the exit unreachable, if any.
///
/// Reachability only gets worse as bytes fall, so the cut-off point is
/// found by bisecting on the number of fallen bytes.
pub fn first_blocking_byte(
    bytes: &[Coord],
    space: MemorySpace,
) -> Result<Option<Coord>, SolveError> {
    let reachable = |n: usize| -> Result<bool, SolveError> {
        Ok(walk(bytes_grid(&bytes[..n], space)?, space)?.is_reachable())
    };

    if reachable(bytes.len())? {
        return Ok(None);
    }
    if !reachable(0)? {
        return Err(SolveError::NoAnswer("exit unreachable on an empty grid".into()));
    }

    // reachable(lo) && !reachable(hi)
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reachable(mid)? {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    log::debug!("exit cut off by byte #{}", hi);
    Ok(Some(bytes[hi - 1]))
}

fn bytes_grid(fallen: &[Coord], space: MemorySpace) -> Result<Grid, SolveError> {
    let side = space.size + 1;
    Ok(Grid::open(side, side)?.with_blocked(fallen.iter().copied())?)
}

fn walk(grid: Grid, space: MemorySpace) -> Result<PathCost, SolveError> {
    let (start, exit) = (Coord::new(0, 0), space.exit());
    if grid.is_blocked(start) || grid.is_blocked(exit) {
        return Ok(PathCost::NotReachable);
    }
    Ok(shortest_path(&grid, start, exit)?)
}
