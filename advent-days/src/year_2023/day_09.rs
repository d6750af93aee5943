//! Day 9: extrapolating difference cascades

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 9, tags = ["2023", "math"])]
pub struct Solver;

impl PuzzleInput for Solver {
    type Data<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|n| {
                        n.parse()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad number {:?}", n)))
                    })
                    .collect()
            })
            .collect()
    }
}

fn differences(sequence: &[i64]) -> Vec<i64> {
    sequence.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Next value of the sequence: once a level is constant its own next value
/// is that constant; every level above adds it to its last entry.
fn extrapolate(sequence: &[i64]) -> Result<i64, SolveError> {
    let (&first, &last) = match (sequence.first(), sequence.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SolveError::SolveFailed("empty sequence".into())),
    };
    if sequence.iter().all(|&v| v == first) {
        return Ok(first);
    }
    Ok(last + extrapolate(&differences(sequence))?)
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let total = data
            .iter()
            .map(|sequence| extrapolate(sequence))
            .sum::<Result<i64, _>>()?;
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        // Extrapolating backwards is extrapolating the reversed sequence
        let total = data
            .iter()
            .map(|sequence| {
                let reversed: Vec<i64> = sequence.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum::<Result<i64, _>>()?;
        Ok(total.to_string())
    }
}
