//! Configuration resolution from CLI args

use crate::cli::Args;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path, `~` expanded
    pub input_dir: PathBuf,
    /// Explicit input file
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Log level when `RUST_LOG` is unset
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.map(|p| expand_tilde(&p)),
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(
            expand_tilde(Path::new("/tmp/~/inputs")),
            PathBuf::from("/tmp/~/inputs")
        );
        assert_eq!(expand_tilde(Path::new("~other")), PathBuf::from("~other"));
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "/data/aoc", "-q", "-v"]).unwrap();
        let config = Config::from_args(args);
        assert_eq!(config.input_dir, PathBuf::from("/data/aoc"));
        assert!(config.quiet);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.input_file.is_none());
    }
}
