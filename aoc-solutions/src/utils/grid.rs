//! Immutable 2D grid of cell markers.
//!
//! Text form is row-major, one marker per cell:
//!
//! | Marker | Cell |
//! |---|---|
//! | `.` | [`Cell::Open`] |
//! | `#` | [`Cell::Blocked`] |
//! | `S` | [`Cell::Start`] |
//! | `E` | [`Cell::Goal`] |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A `(row, col)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The four orthogonal neighbours that don't underflow. Bounds above are
    /// the grid's concern.
    pub fn orthogonal(self) -> impl Iterator<Item = Coord> {
        let Coord { row, col } = self;
        [
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            Some(Coord::new(row + 1, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            Some(Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
    Start,
    Goal,
}

impl Cell {
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Blocked),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Blocked => '#',
            Cell::Start => 'S',
            Cell::Goal => 'E',
        }
    }
}

/// Errors from decoding or building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown marker {marker:?} at {at}")]
    UnknownMarker { marker: char, at: Coord },
    #[error("second {marker:?} marker at {at}")]
    DuplicateMarker { marker: char, at: Coord },
    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),
    #[error("row {row} follows a blank line")]
    TrailingData { row: usize },
}

/// Immutable rectangular grid. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    height: usize,
    width: usize,
    start: Option<Coord>,
    goal: Option<Coord>,
}

impl Grid {
    /// An all-open grid with no start or goal marker.
    pub fn open(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells: vec![Cell::Open; height * width],
            height,
            width,
            start: None,
            goal: None,
        })
    }

    /// Copy of this grid with every coordinate in `blocked` turned into a wall.
    ///
    /// Blocking a start or goal cell removes that marker.
    pub fn with_blocked<I>(&self, blocked: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = self.clone();
        for at in blocked {
            let idx = grid.index(at).ok_or(GridError::OutOfBounds(at))?;
            grid.cells[idx] = Cell::Blocked;
            if grid.start == Some(at) {
                grid.start = None;
            }
            if grid.goal == Some(at) {
                grid.goal = None;
            }
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.height && at.col < self.width
    }

    pub fn cell(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Out-of-bounds coordinates count as blocked.
    pub fn is_blocked(&self, at: Coord) -> bool {
        self.cell(at).is_none_or(|c| c == Cell::Blocked)
    }

    /// In-bounds, non-blocked orthogonal neighbours of `at`.
    pub fn neighbors(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        at.orthogonal().filter(|&n| !self.is_blocked(n))
    }

    /// Every non-blocked coordinate in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Cell::Blocked)
            .map(|(i, _)| self.coord(i))
    }

    fn index(&self, at: Coord) -> Option<usize> {
        self.contains(at).then(|| at.row * self.width + at.col)
    }

    fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.width, idx % self.width)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;
        let mut blank_seen = false;

        for (row, line) in s.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                blank_seen = true;
                continue;
            }
            if blank_seen {
                return Err(GridError::TrailingData { row });
            }
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found,
                });
            }

            for (col, marker) in line.chars().enumerate() {
                let at = Coord::new(row, col);
                let cell =
                    Cell::from_marker(marker).ok_or(GridError::UnknownMarker { marker, at })?;
                let slot = match cell {
                    Cell::Start => Some(&mut start),
                    Cell::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(slot) = slot {
                    if slot.is_some() {
                        return Err(GridError::DuplicateMarker { marker, at });
                    }
                    *slot = Some(at);
                }
                cells.push(cell);
            }
            height += 1;
        }

        let width = width.ok_or(GridError::Empty)?;
        Ok(Self {
            cells,
            height,
            width,
            start,
            goal,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().map(|c| c.marker()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_markers() {
        let grid: Grid = "S.#\n.#E\n".parse().unwrap();

        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.start(), Some(Coord::new(0, 0)));
        assert_eq!(grid.goal(), Some(Coord::new(1, 2)));
        assert_eq!(grid.cell(Coord::new(0, 2)), Some(Cell::Blocked));
        assert!(grid.is_blocked(Coord::new(1, 1)));
        assert!(grid.is_blocked(Coord::new(5, 0)));
        assert_eq!(grid.to_string(), "S.#\n.#E\n");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
        assert_eq!(
            "...\n..\n".parse::<Grid>(),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            ".x.".parse::<Grid>(),
            Err(GridError::UnknownMarker {
                marker: 'x',
                at: Coord::new(0, 1)
            })
        );
        assert_eq!(
            "S.S".parse::<Grid>(),
            Err(GridError::DuplicateMarker {
                marker: 'S',
                at: Coord::new(0, 2)
            })
        );
    }

    #[test]
    fn test_parse_rejects_rows_after_blank_line() {
        assert_eq!(
            "S..\n\n..E".parse::<Grid>(),
            Err(GridError::TrailingData { row: 2 })
        );
        assert_eq!(
            "\n.#.".parse::<Grid>(),
            Err(GridError::TrailingData { row: 1 })
        );

        // Trailing blank lines are fine.
        let grid: Grid = "S.\n.E\n\n\n".parse().unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.goal(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let grid: Grid = ".#.\n...\n".parse().unwrap();

        let mut corner: Vec<_> = grid.neighbors(Coord::new(0, 0)).collect();
        corner.sort();
        assert_eq!(corner, vec![Coord::new(1, 0)]);

        let mut middle: Vec<_> = grid.neighbors(Coord::new(1, 1)).collect();
        middle.sort();
        assert_eq!(middle, vec![Coord::new(1, 0), Coord::new(1, 2)]);
    }

    #[test]
    fn test_with_blocked() {
        let grid = Grid::open(2, 2).unwrap();
        let walled = grid.with_blocked([Coord::new(0, 1)]).unwrap();

        assert!(!grid.is_blocked(Coord::new(0, 1)));
        assert!(walled.is_blocked(Coord::new(0, 1)));
        assert_eq!(walled.open_cells().count(), 3);
        assert_eq!(
            grid.with_blocked([Coord::new(2, 0)]),
            Err(GridError::OutOfBounds(Coord::new(2, 0)))
        );
        assert_eq!(Grid::open(0, 4), Err(GridError::Empty));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 3)), 5);
        assert_eq!(Coord::new(4, 1).manhattan(Coord::new(1, 4)), 6);
    }
}
