//! Day 3: part numbers and gears in an engine schematic

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A maximal horizontal digit run
#[derive(Debug, Clone, PartialEq, Eq)]
struct Number {
    value: u32,
    row: usize,
    /// Columns `col_start..col_end` hold the digits
    col_start: usize,
    col_end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Symbol {
    glyph: u8,
    row: usize,
    col: usize,
}

impl Number {
    /// Whether the symbol touches the run, diagonals included
    fn is_adjacent(&self, symbol: &Symbol) -> bool {
        symbol.row + 1 >= self.row
            && symbol.row <= self.row + 1
            && symbol.col + 1 >= self.col_start
            && symbol.col < self.col_end + 1
    }
}

#[derive(Debug)]
pub struct Schematic {
    rows: Vec<Vec<u8>>,
    scan: Option<Scan>,
}

/// Numbers and symbols extracted from the schematic, shared by both parts
#[derive(Debug)]
struct Scan {
    numbers: Vec<Number>,
    symbols: Vec<Symbol>,
}

impl PuzzleInput for Solver {
    type Data<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        let rows: Vec<Vec<u8>> = input
            .trim()
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .collect();
        if rows.is_empty() {
            return Err(ParseError::MissingData("empty schematic".into()));
        }
        Ok(Schematic { rows, scan: None })
    }
}

fn scan_schematic(rows: &[Vec<u8>]) -> Scan {
    let mut numbers = Vec::new();
    let mut symbols = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        let mut col = 0;
        while col < line.len() {
            let cell = line[col];
            if cell.is_ascii_digit() {
                let start = col;
                let mut value = 0u32;
                while col < line.len() && line[col].is_ascii_digit() {
                    value = value * 10 + u32::from(line[col] - b'0');
                    col += 1;
                }
                numbers.push(Number {
                    value,
                    row,
                    col_start: start,
                    col_end: col,
                });
            } else {
                if cell != b'.' {
                    symbols.push(Symbol {
                        glyph: cell,
                        row,
                        col,
                    });
                }
                col += 1;
            }
        }
    }

    Scan { numbers, symbols }
}

fn scan_once(data: &mut Schematic) -> &Scan {
    data.scan.get_or_insert_with(|| scan_schematic(&data.rows))
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let scan = scan_once(data);
        let total: u32 = scan
            .numbers
            .iter()
            .filter(|n| scan.symbols.iter().any(|s| n.is_adjacent(s)))
            .map(|n| n.value)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let scan = scan_once(data);
        let total: u64 = scan
            .symbols
            .iter()
            .filter(|s| s.glyph == b'*')
            .filter_map(|star| {
                let mut touching = scan.numbers.iter().filter(|n| n.is_adjacent(star));
                let first = touching.next()?;
                let second = touching.next()?;
                // A gear has exactly two neighbours
                match touching.next() {
                    None => Some(u64::from(first.value) * u64::from(second.value)),
                    Some(_) => None,
                }
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn part_numbers_example() {
        assert_eq!(run(EXAMPLE, 1), "4361");
    }

    #[test]
    fn gear_ratios_example() {
        assert_eq!(run(EXAMPLE, 2), "467835");
    }

    #[test]
    fn scan_finds_numbers_and_symbols() {
        let mut data = Solver::parse(EXAMPLE).unwrap();
        let scan = scan_once(&mut data);
        assert_eq!(scan.numbers.len(), 10);
        assert_eq!(scan.numbers[0].value, 467);
        assert_eq!(scan.symbols.iter().filter(|s| s.glyph == b'*').count(), 3);
    }

    #[test]
    fn numbers_without_symbols_are_ignored() {
        let mut data = Solver::parse("12.\n...\n...").unwrap();
        assert_eq!(
            <Solver as advent_core::Puzzle>::solve_part(&mut data, 1).unwrap(),
            "0"
        );
    }

    #[test]
    fn star_with_one_neighbour_is_not_a_gear() {
        let mut data = Solver::parse("617*......").unwrap();
        assert_eq!(
            <Solver as advent_core::Puzzle>::solve_part(&mut data, 2).unwrap(),
            "0"
        );
    }
}
