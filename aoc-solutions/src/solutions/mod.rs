//! Puzzle solutions grouped by event year.

pub mod year_2023;
pub mod year_2024;
