//! Static solver table for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::HashSet;

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: u8 = 25;

/// Check that year/day fall inside the supported window
#[inline]
fn valid_year_day(year: u16, day: u8) -> bool {
    (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year) && (1..=DAYS_PER_YEAR).contains(&day)
}

/// Factory function that parses input into a boxed solver
pub type SolverFactory = for<'a> fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

/// Metadata about a table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags for filtering (e.g. "grid-path", "memo")
    pub tags: &'static [&'static str],
}

/// One solver in a [`SolverTable`]
pub struct SolverEntry {
    info: FactoryInfo,
    factory: SolverFactory,
}

impl SolverEntry {
    /// Create an entry for solver type `S`
    ///
    /// `const` so that tables can live in a `static`.
    pub const fn new<S: Solver + 'static>(
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            info: FactoryInfo {
                year,
                day,
                parts: S::PARTS,
                tags,
            },
            factory: instantiate::<S>,
        }
    }

    /// Metadata for this entry
    pub fn info(&self) -> FactoryInfo {
        self.info
    }
}

fn instantiate<'a, S: Solver + 'static>(
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<S>::new(input)?))
}

/// Immutable lookup table over a static list of solver entries
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver, SolverEntry, SolverTable};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Sum {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u32>().to_string())
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => <Self as PartSolver<1>>::solve(shared),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
///
/// static ENTRIES: &[SolverEntry] = &[SolverEntry::new::<Sum>(2015, 1, &["easy"])];
///
/// let table = SolverTable::new(ENTRIES).unwrap();
/// let mut solver = table.create_solver(2015, 1, "1\n2\n3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "6");
/// ```
#[derive(Clone, Copy)]
pub struct SolverTable {
    entries: &'static [SolverEntry],
}

impl SolverTable {
    /// Wrap a static entry list, rejecting duplicates and out-of-range year/day pairs
    pub fn new(entries: &'static [SolverEntry]) -> Result<Self, RegistrationError> {
        let mut seen = HashSet::new();
        for FactoryInfo { year, day, .. } in entries.iter().map(SolverEntry::info) {
            if !valid_year_day(year, day) {
                return Err(RegistrationError::InvalidYearDay(year, day));
            }
            if !seen.insert((year, day)) {
                return Err(RegistrationError::DuplicateSolver(year, day));
            }
        }
        Ok(Self { entries })
    }

    /// Iterate over metadata for all entries, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        let mut infos: Vec<FactoryInfo> = self.entries.iter().map(SolverEntry::info).collect();
        infos.sort_by_key(|info| (info.year, info.day));
        infos.into_iter()
    }

    /// Get metadata for a specific entry
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.find(year, day).map(SolverEntry::info)
    }

    /// Check if an entry exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.find(year, day).is_some()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `input` with the solver registered for year/day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.find(year, day).ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    fn find(&self, year: u16, day: u8) -> Option<&SolverEntry> {
        self.entries
            .iter()
            .find(|e| e.info.year == year && e.info.day == day)
    }
}
