//! Command-line runner for the advent puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link the solutions crate so its puzzle plugins are collected
use advent_days as _;

use advent_core::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);

    let registry = build_registry(&config.tags)?;

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No puzzles found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs still run (and fail per part); say up front which
    // files would be needed.
    let missing = missing_inputs(&work_items, &executor);
    if !missing.is_empty() {
        println!("Missing {} input file(s):", missing.len());
        for path in &missing {
            println!("  - {}", path.display());
        }
        println!("Place the puzzle inputs at those paths to run them.");
        println!();
    }

    run_executor(executor, config.quiet)
}

/// Expected paths of inputs that are not on disk
fn missing_inputs(work_items: &[executor::WorkItem], executor: &Executor) -> Vec<std::path::PathBuf> {
    let store = executor.store();
    work_items
        .iter()
        .filter(|w| !store.contains(w.year, w.day))
        .map(|w| store.input_path(w.year, w.day))
        .collect()
}

/// Run the executor in the background, printing results as they are ready
fn run_executor(executor: Executor, quiet: bool) -> Result<(), CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} puzzle(s)...", work_items.len());

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    // Results stream in pool order; the aggregator restores (year, day,
    // part) order before printing.
    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Anything still buffered means an expected result never arrived
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build the registry, restricted to the requested tags
fn build_registry(tags: &[String]) -> Result<advent_core::PuzzleRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
