//! Output formatting for solver results

use crate::runner::RunResult;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &RunResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &RunResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    fn print_full(&self, result: &RunResult) {
        match &result.answer {
            Ok(_) => println!("{}", format_line(result)),
            Err(_) => eprintln!("{}", format_line(result)),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[RunResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        if failures > 0 {
            println!("Failed: {}", failed_parts(results));
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `YYYY/DD Part N: answer (parse: .., solve: ..)` or `YYYY/DD Part N: Error - ..`
fn format_line(result: &RunResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

    match &result.answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            )
        }
        Err(e) => format!("{}: Error - {}", prefix, e),
    }
}

fn failed_parts(results: &[RunResult]) -> String {
    results
        .iter()
        .filter(|r| r.answer.is_err())
        .map(|r| format!("{}/{:02}.{}", r.year, r.day, r.part))
        .join(", ")
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputError, RunError};
    use std::path::PathBuf;

    fn result(part: u8, answer: Result<String, RunError>) -> RunResult {
        RunResult {
            year: 2024,
            day: 8,
            part,
            answer,
            parse_duration: Some(TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(12),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(&result(1, Ok("42".into()))),
            "2024/08 Part 1: 42 (parse: 250µs, solve: 12.00ms)"
        );

        let missing = InputError::Missing(PathBuf::from("/in/2024_day08.txt"));
        assert_eq!(
            format_line(&result(2, Err(missing.into()))),
            "2024/08 Part 2: Error - input file /in/2024_day08.txt not found"
        );
    }

    #[test]
    fn test_failed_parts_listed() {
        let missing = InputError::Missing(PathBuf::from("x"));
        let results = [
            result(1, Ok("1".into())),
            result(2, Err(missing.into())),
        ];
        assert_eq!(failed_parts(&results), "2024/08.2");
    }
}
