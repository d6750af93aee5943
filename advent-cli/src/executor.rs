//! Parallel executor for running puzzles

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_core::{DynPuzzle, ParseError, PuzzleError, PuzzleRegistry};
use chrono::{TimeDelta, Utc};
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from running one part
pub struct RunResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, PuzzleError>,
    /// Set on the first part emitted for a day, so summaries count each
    /// parse once
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle (and the parts of it) scheduled to run
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items on a rayon pool and streams results to a channel
pub struct Executor {
    run_config: SyncRunConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncRunConfig {
    registry: PuzzleRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: PuzzleRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            run_config: SyncRunConfig {
                registry,
                store: InputStore::new(config.input_dir.clone(), config.test_input),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// The input store this executor reads from
    pub fn store(&self) -> &InputStore {
        &self.run_config.store
    }

    /// Work items from registry metadata, after applying the filters
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.run_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Intersect the part filter with the puzzle's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.run_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item, streaming results to `tx`
    pub fn execute(&self, tx: Sender<RunResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.run_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_day(&work, &tx, &self.run_config) {
                        collected = Some(ArcExecutorError::combine_opt(collected, e));
                    }
                }
                collected.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let chunks = work_items.into_iter().chunk_by(|w| w.year);
                let by_year: Vec<Vec<WorkItem>> = chunks
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across work items; Part
            // additionally fans out inside run_day
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Run work items in parallel, collecting every error
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let run_config = &self.run_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_day(&work, tx, run_config).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Run groups in parallel, each group sequential inside (year mode)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<RunResult>,
    ) -> Result<(), ArcExecutorError> {
        let run_config = &self.run_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_day(&work, tx, run_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Error result standing in for a part that could not be attempted
fn error_result(year: u16, day: u8, part: u8, message: &str) -> RunResult {
    RunResult {
        year,
        day,
        part,
        answer: Err(PuzzleError::Parse(ParseError::InvalidFormat(
            message.to_string(),
        ))),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run one day's scheduled parts
fn run_day(
    work: &WorkItem,
    tx: &Sender<RunResult>,
    run_config: &SyncRunConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match run_config.store.read(year, day) {
        Ok(Some(input)) => input,
        Ok(None) => {
            let e = ExecutorError::InputRead {
                year,
                day,
                source: format!(
                    "no such file {}",
                    run_config.store.input_path(year, day).display()
                )
                .into(),
            };
            return send_error_results(work, tx, &e.to_string());
        }
        Err(e) => {
            let e = ExecutorError::InputRead {
                year,
                day,
                source: Box::new(e),
            };
            return send_error_results(work, tx, &e.to_string());
        }
    };

    if matches!(run_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, run_config)
    } else {
        run_parts_sequential(work, &input, tx, run_config)
    }
}

/// Report every scheduled part of a day as failed
fn send_error_results(
    work: &WorkItem,
    tx: &Sender<RunResult>,
    message: &str,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        tx.send(error_result(work.year, work.day, part, message))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Parse once, then answer the parts in order
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<RunResult>,
    run_config: &SyncRunConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut puzzle = match run_config.registry.create(year, day, input) {
        Ok(puzzle) => puzzle,
        Err(e) => return send_error_results(work, tx, &e.to_string()),
    };

    let mut parse_duration = Some(puzzle.parse_duration());
    for part in work.parts.clone() {
        let (answer, solve_duration) = solve_one(&mut *puzzle, part);
        tx.send(RunResult {
            year,
            day,
            part,
            answer,
            parse_duration: parse_duration.take(),
            solve_duration,
        })
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Answer the parts in parallel (each re-parses), buffering results so they
/// still go out in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<RunResult>,
    run_config: &SyncRunConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &run_config.registry;
    let first_part = *work.parts.start();

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create(year, day, input) {
                Ok(mut puzzle) => {
                    let parse_duration =
                        (part == first_part).then(|| puzzle.parse_duration());
                    let (answer, solve_duration) = solve_one(&mut *puzzle, part);
                    RunResult {
                        year,
                        day,
                        part,
                        answer,
                        parse_duration,
                        solve_duration,
                    }
                }
                Err(e) => error_result(year, day, part, &e.to_string()),
            };
            rtx.send(result).ok();
        });

    // Emit buffered results in part order
    let mut buffer: [Option<RunResult>; 2] = [None, None];
    let mut next_part = first_part;

    for result in result_rx {
        let idx = (result.part - first_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        while let Some(result) = buffer
            .get_mut((next_part - first_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Solve one part, timing failures as well as successes
fn solve_one(puzzle: &mut dyn DynPuzzle, part: u8) -> (Result<String, PuzzleError>, TimeDelta) {
    let fallback_start = Utc::now();
    match puzzle.solve(part) {
        Ok(outcome) => {
            let duration = outcome.duration();
            (Ok(outcome.answer), duration)
        }
        Err(e) => (Err(e.into()), Utc::now() - fallback_start),
    }
}
