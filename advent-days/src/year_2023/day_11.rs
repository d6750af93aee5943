//! Day 11: expanding space between galaxies

use crate::utils::grid::{Grid, MARK};
use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use itertools::Itertools;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 11, tags = ["2023", "grid"])]
pub struct Solver;

/// Every empty row and column counts `factor` times in part 2's map
const PART_TWO_FACTOR: u64 = 1_000_000;

impl PuzzleInput for Solver {
    type Data<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Grid::from_lines(input.trim().lines().map(str::trim))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Galaxy coordinates after replacing each empty row/column with `factor`
/// copies of itself. Positions shift by `factor - 1` per preceding empty
/// line, so the grid itself never needs rewriting.
fn expanded_galaxies(grid: &Grid, factor: u64) -> Vec<(u64, u64)> {
    let empty_cols: Vec<usize> = grid
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, col)| !col.contains(&MARK))
        .map(|(x, _)| x)
        .collect();
    let empty_rows: Vec<usize> = grid
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.contains(&MARK))
        .map(|(y, _)| y)
        .collect();

    grid.positions(MARK)
        .map(|(x, y)| {
            let cols_before = empty_cols.iter().filter(|&&c| c < x).count() as u64;
            let rows_before = empty_rows.iter().filter(|&&r| r < y).count() as u64;
            (
                x as u64 + cols_before * (factor - 1),
                y as u64 + rows_before * (factor - 1),
            )
        })
        .collect()
}

fn manhattan(a: (u64, u64), b: (u64, u64)) -> u64 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

fn pair_distance_sum(grid: &Grid, factor: u64) -> u64 {
    expanded_galaxies(grid, factor)
        .into_iter()
        .tuple_combinations::<(_, _)>()
        .map(|(a, b)| manhattan(a, b))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(pair_distance_sum(data, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(pair_distance_sum(data, PART_TWO_FACTOR).to_string())
    }
}
