//! Day 4: scratchcards and their cascading copies

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::{Context, anyhow};
use std::collections::HashSet;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 4, tags = ["2023", "parsing"])]
pub struct Solver;

#[derive(Debug)]
pub struct Card {
    /// Count of numbers appearing on both sides of the bar
    matches: usize,
}

impl PuzzleInput for Solver {
    type Data<'a> = Vec<Card>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_card(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_card(line: &str) -> Result<Card, anyhow::Error> {
    let (_, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' separator"))?;
    let (winning, have) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' separator"))?;

    let winning: HashSet<u32> = winning
        .split_whitespace()
        .map(|n| n.parse().context("bad winning number"))
        .collect::<Result<_, _>>()?;
    let matches = have
        .split_whitespace()
        .map(|n| n.parse::<u32>().context("bad card number"))
        .try_fold(0, |count, n| {
            n.map(|n| count + usize::from(winning.contains(&n)))
        })?;

    Ok(Card { matches })
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let points: u64 = data
            .iter()
            .filter(|card| card.matches > 0)
            .map(|card| 1u64 << (card.matches - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        // Each card starts as one copy; card i adds its copy count to the
        // next `matches` cards.
        let mut counts = vec![1u64; data.len()];
        for (i, card) in data.iter().enumerate() {
            for offset in 1..=card.matches {
                if i + offset < counts.len() {
                    counts[i + offset] += counts[i];
                }
            }
        }
        Ok(counts.iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn match_counts() {
        let cards = Solver::parse(EXAMPLE).unwrap();
        let matches: Vec<_> = cards.iter().map(|c| c.matches).collect();
        assert_eq!(matches, vec![4, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn points_example() {
        assert_eq!(run(EXAMPLE, 1), "13");
    }

    #[test]
    fn copies_example() {
        assert_eq!(run(EXAMPLE, 2), "30");
    }

    #[test]
    fn matchless_card_scores_nothing() {
        assert_eq!(run("Card 1: 1 2 | 3 4", 1), "0");
    }
}
