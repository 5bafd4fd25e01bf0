//! Tests for the static solver table and timed instances

use aoc_solver::{
    AocParser, ParseError, PartSolver, RegistrationError, SolveError, Solver, SolverEntry,
    SolverError, SolverTable,
};

struct Lines;

impl AocParser for Lines {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Lines {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|l| l.len())
            .map(|l| l.to_string())
            .ok_or_else(|| SolveError::NoAnswer("empty".into()))
    }
}

impl Solver for Lines {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

static ENTRIES: &[SolverEntry] = &[
    SolverEntry::new::<Lines>(2024, 3, &["text"]),
    SolverEntry::new::<Lines>(2023, 7, &["text", "copy"]),
];

static DUPLICATES: &[SolverEntry] = &[
    SolverEntry::new::<Lines>(2024, 3, &[]),
    SolverEntry::new::<Lines>(2024, 3, &[]),
];

static OUT_OF_RANGE: &[SolverEntry] = &[SolverEntry::new::<Lines>(2024, 26, &[])];

#[test]
fn test_create_and_solve() {
    let table = SolverTable::new(ENTRIES).unwrap();
    let mut solver = table.create_solver(2024, 3, "ab\nabcd\nc").unwrap();

    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "abcd");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert!(result.span.end >= result.span.start);
    assert_eq!(result.duration(), result.span.duration());
}

#[test]
fn test_info_sorted_by_year_day() {
    let table = SolverTable::new(ENTRIES).unwrap();
    let keys: Vec<(u16, u8)> = table.iter_info().map(|i| (i.year, i.day)).collect();

    assert_eq!(keys, vec![(2023, 7), (2024, 3)]);
    assert_eq!(table.len(), 2);
    assert!(table.contains(2023, 7));
    assert_eq!(table.get_info(2023, 7).unwrap().tags, &["text", "copy"]);
    assert!(table.get_info(2015, 1).is_none());
}

#[test]
fn test_missing_solver() {
    let table = SolverTable::new(ENTRIES).unwrap();
    let result = table.create_solver(2015, 1, "x");
    assert!(matches!(result, Err(SolverError::NotFound(2015, 1))));
}

#[test]
fn test_parse_error_propagates() {
    let table = SolverTable::new(ENTRIES).unwrap();
    let result = table.create_solver(2024, 3, "");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_duplicate_rejected() {
    assert!(matches!(
        SolverTable::new(DUPLICATES),
        Err(RegistrationError::DuplicateSolver(2024, 3))
    ));
}

#[test]
fn test_out_of_range_rejected() {
    assert!(matches!(
        SolverTable::new(OUT_OF_RANGE),
        Err(RegistrationError::InvalidYearDay(2024, 26))
    ));
}
