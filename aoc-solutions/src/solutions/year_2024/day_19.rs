//! Linen Layout: count the ways each design splits into available towels.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

pub struct Day19;

#[derive(Debug)]
pub struct SharedData<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    arrangements: Option<Vec<u64>>,
}

impl AocParser for Day19 {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim);

        let towels: Vec<&str> = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ParseError::MissingData("towel list".into()))?
            .split(',')
            .map(str::trim)
            .collect();
        if towels.iter().any(|t| t.is_empty()) {
            return Err(ParseError::InvalidFormat("empty towel in list".into()));
        }

        if lines.next().is_some_and(|l| !l.is_empty()) {
            return Err(ParseError::InvalidFormat(
                "expected a blank line after the towel list".into(),
            ));
        }

        Ok(SharedData {
            towels,
            designs: lines.filter(|l| !l.is_empty()).collect(),
            arrangements: None,
        })
    }
}

impl PartSolver<1> for Day19 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = arrangements(shared).iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Day19 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(arrangements(shared).iter().sum::<u64>().to_string())
    }
}

impl Solver for Day19 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn arrangements<'s>(shared: &'s mut SharedData<'_>) -> &'s [u64] {
    let SharedData {
        towels,
        designs,
        arrangements,
    } = shared;
    let towels: &[&str] = towels;
    arrangements.get_or_insert_with(|| {
        designs
            .iter()
            .map(|design| count_arrangements(design, towels))
            .collect()
    })
}

/// Suffix-counting problem: the value at byte offset `i` is the number of
/// ways to build `design[i..]` from towels.
struct Segmentation<'a> {
    design: &'a [u8],
    towels: &'a [&'a str],
}

impl DpProblem<usize, u64> for Segmentation<'_> {
    fn deps(&self, at: &usize) -> Vec<usize> {
        let rest = &self.design[*at..];
        self.towels
            .iter()
            .filter(|t| rest.starts_with(t.as_bytes()))
            .map(|t| at + t.len())
            .collect()
    }

    fn compute(&self, at: &usize, deps: Vec<u64>) -> u64 {
        if *at == self.design.len() {
            1
        } else {
            deps.iter().sum()
        }
    }
}

/// Number of distinct towel sequences that spell `design`.
///
/// Each call owns its memo table.
pub fn count_arrangements(design: &str, towels: &[&str]) -> u64 {
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(design.len() + 1),
        Segmentation {
            design: design.as_bytes(),
            towels,
        },
    );
    cache.get(&0)
}
