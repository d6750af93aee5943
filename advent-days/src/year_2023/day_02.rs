//! Day 2: cube drawing games

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::{Context, anyhow};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

/// Cubes shown in one draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    fn fits_within(&self, limit: &CubeSet) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    fn max(&self, other: &CubeSet) -> CubeSet {
        CubeSet {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    draws: Vec<CubeSet>,
}

const BAG_LIMIT: CubeSet = CubeSet {
    red: 12,
    green: 13,
    blue: 14,
};

impl PuzzleInput for Solver {
    type Data<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_game(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_game(line: &str) -> Result<Game, anyhow::Error> {
    let (header, draws_part) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ': ' separator"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>', got {:?}", header))?
        .parse()
        .context("bad game id")?;

    let draws = draws_part
        .split("; ")
        .map(parse_draw)
        .collect::<Result<_, _>>()?;

    Ok(Game { id, draws })
}

fn parse_draw(draw: &str) -> Result<CubeSet, anyhow::Error> {
    let mut cubes = CubeSet::default();
    for entry in draw.split(", ") {
        let (count, colour) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <colour>', got {:?}", entry))?;
        let count: u32 = count.parse().context("bad cube count")?;
        match colour {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            "blue" => cubes.blue += count,
            other => return Err(anyhow!("unknown colour {:?}", other)),
        }
    }
    Ok(cubes)
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let possible: u32 = data
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_within(&BAG_LIMIT)))
            .map(|game| game.id)
            .sum();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let total: u32 = data
            .iter()
            .map(|game| {
                game.draws
                    .iter()
                    .fold(CubeSet::default(), |acc, draw| acc.max(draw))
                    .power()
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn parses_ids_and_draws() {
        let games = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(games.len(), 5);
        assert_eq!(games[4].id, 5);
        assert_eq!(
            games[4].draws[1],
            CubeSet {
                red: 1,
                green: 2,
                blue: 2
            }
        );
    }

    #[test]
    fn possible_games_example() {
        assert_eq!(run(EXAMPLE, 1), "8");
    }

    #[test]
    fn minimum_set_powers_example() {
        assert_eq!(run(EXAMPLE, 2), "2286");
    }

    #[test]
    fn rejects_unknown_colour() {
        assert!(Solver::parse("Game 1: 3 yellow").is_err());
    }
}
