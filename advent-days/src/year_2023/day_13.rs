//! Day 13: mirror lines in ash-and-rock patterns

use crate::utils::grid::Grid;
use crate::utils::reflection::total_score;
use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 13, tags = ["2023", "grid"])]
pub struct Solver;

impl PuzzleInput for Solver {
    type Data<'a> = Vec<Grid>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(block_idx, block)| {
                Grid::from_lines(block.lines().map(str::trim)).map_err(|e| {
                    ParseError::InvalidFormat(format!("(pattern {}) {}", block_idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(total_score(data.iter(), false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(total_score(data.iter(), true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn splits_blocks_on_blank_lines() {
        let grids = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(grids.len(), 2);
        assert_eq!(grids[0].width(), 9);
        assert_eq!(grids[1].height(), 7);
    }

    #[test]
    fn exact_mirrors_example() {
        assert_eq!(run(EXAMPLE, 1), "405");
    }

    #[test]
    fn smudged_mirrors_example() {
        assert_eq!(run(EXAMPLE, 2), "400");
    }

    #[test]
    fn bad_pattern_names_the_block() {
        let err = Solver::parse("#.\n.#\n\n#x").unwrap_err();
        assert!(err.to_string().contains("pattern 2"));
    }
}
