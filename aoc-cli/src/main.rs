//! AOC CLI - run the grid solvers over local input files

mod cli;
mod config;
mod error;
mod inputs;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use inputs::InputStore;
use output::OutputFormatter;
use runner::Runner;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), CliError> {
    let table = aoc_solutions::table()?;

    let inputs = match &config.input_file {
        Some(file) => InputStore::with_file(config.input_dir.clone(), file.clone()),
        None => InputStore::new(config.input_dir.clone()),
    };
    let runner = Runner::new(table, inputs, &config);

    let work_items = runner.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if config.input_file.is_some() && work_items.len() != 1 {
        return Err(CliError::Config(format!(
            "--input needs exactly one solver, but the filters select {}",
            work_items.len()
        )));
    }

    log::info!("running {} solver(s)", work_items.len());

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    runner.run(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    match results.iter().filter(|r| r.answer.is_err()).count() {
        0 => Ok(()),
        n => Err(CliError::Failures(n)),
    }
}
