//! Day 6: toy boat races decided by a quadratic

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::{Context, anyhow};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Races {
    times: Vec<u64>,
    distances: Vec<u64>,
}

impl PuzzleInput for Solver {
    type Data<'a> = Races;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        parse_races(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_races(input: &str) -> Result<Races, anyhow::Error> {
    let mut lines = input.trim().lines();
    let times = parse_row(lines.next(), "Time:")?;
    let distances = parse_row(lines.next(), "Distance:")?;
    if times.len() != distances.len() {
        return Err(anyhow!(
            "{} times but {} distances",
            times.len(),
            distances.len()
        ));
    }
    Ok(Races { times, distances })
}

fn parse_row(line: Option<&str>, label: &str) -> Result<Vec<u64>, anyhow::Error> {
    line.and_then(|l| l.strip_prefix(label))
        .ok_or_else(|| anyhow!("expected a {:?} line", label))?
        .split_whitespace()
        .map(|n| n.parse().context("bad number"))
        .collect()
}

/// How many whole-number charge times beat the record.
///
/// Charging for `c` of the `t` milliseconds travels `c * (t - c)`, so the
/// winning charge times are the integers strictly between the roots of
/// `c^2 - t*c + record = 0`. An exact integer root only ties the record and
/// is excluded.
fn winning_charge_times(time: u64, record: u64) -> u64 {
    let time_f = time as f64;
    let discriminant = time_f * time_f - 4.0 * record as f64;
    if discriminant < 0.0 {
        return 0;
    }
    let offset = discriminant.sqrt();
    let lower = (time_f - offset) / 2.0;
    let upper = (time_f + offset) / 2.0;

    let first = (lower + 1.0).floor();
    let mut past_last = (upper + 1.0).floor();
    if past_last == upper + 1.0 {
        past_last -= 1.0;
    }
    if past_last <= first {
        return 0;
    }
    (past_last - first) as u64
}

/// One digit-concatenated race from the badly kerned sheet
fn concatenated(values: &[u64]) -> Result<u64, SolveError> {
    values
        .iter()
        .map(u64::to_string)
        .collect::<String>()
        .parse()
        .map_err(|e: std::num::ParseIntError| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let product: u64 = data
            .times
            .iter()
            .zip(&data.distances)
            .map(|(&time, &record)| winning_charge_times(time, record))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let time = concatenated(&data.times)?;
        let record = concatenated(&data.distances)?;
        Ok(winning_charge_times(time, record).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn counts_from_the_example_races() {
        assert_eq!(winning_charge_times(7, 9), 4);
        assert_eq!(winning_charge_times(15, 40), 8);
        assert_eq!(winning_charge_times(30, 200), 9);
    }

    #[test]
    fn exact_root_only_ties_the_record() {
        // time 4, record 4: charge 2 travels exactly 4, which loses;
        // charges 1 and 3 travel 3.
        assert_eq!(winning_charge_times(4, 4), 0);
        assert_eq!(winning_charge_times(4, 3), 1);
    }

    #[test]
    fn margin_product_example() {
        assert_eq!(run(EXAMPLE, 1), "288");
    }

    #[test]
    fn concatenated_race_example() {
        assert_eq!(run(EXAMPLE, 2), "71503");
    }
}
