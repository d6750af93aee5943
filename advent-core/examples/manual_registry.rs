//! Registering a puzzle by hand, without the derive macros.
//!
//! Run with: cargo run --example manual_registry -p advent-core

use advent_core::{
    DynPuzzle, ParseError, PartSolver, Puzzle, PuzzleInput, RegistryBuilder, SolveError,
};

/// Sum and max of a list of integers
struct Totals;

impl PuzzleInput for Totals {
    type Data<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .map(|l| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not an integer: {l:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Totals {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Totals {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        data.iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

impl Puzzle for Totals {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(data),
            2 => <Self as PartSolver<2>>::solve(data),
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = RegistryBuilder::new().register::<Totals>(2023, 1)?.build();

    let input = "3\n14\n15\n92\n65";
    let mut puzzle = registry.create(2023, 1, input)?;
    for part in 1..=puzzle.parts() {
        let outcome = puzzle.solve(part)?;
        println!(
            "{}/{:02} part {}: {} ({}µs)",
            puzzle.year(),
            puzzle.day(),
            part,
            outcome.answer,
            outcome.duration().num_microseconds().unwrap_or(0)
        );
    }
    Ok(())
}
