//! Day 1: calibration values hidden in noisy lines

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::anyhow;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 1, tags = ["2023", "parsing"])]
pub struct Solver;

const SPELLED: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

impl PuzzleInput for Solver {
    type Data<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        Ok(input.lines().map(str::trim).collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        sum_calibrations(data, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        sum_calibrations(data, true)
    }
}

fn sum_calibrations(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| calibration_value(line, spelled))
        .sum::<Result<u32, _>>()
        .map(|total| total.to_string())
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

fn calibration_value(line: &str, spelled: bool) -> Result<u32, anyhow::Error> {
    let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, spelled));
    let first = digits
        .next()
        .ok_or_else(|| anyhow!("no digit in line {:?}", line))?;
    let last = digits.last().unwrap_or(first);
    Ok(10 * first + last)
}

/// Digit starting at byte offset `i`, either a literal digit or (when
/// `spelled`) a written-out word. Words may overlap, so each offset is
/// checked independently.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = line.get(i..)?;
    if let Some(d) = rest.chars().next().and_then(|c| c.to_digit(10)) {
        return Some(d);
    }
    if spelled {
        return SPELLED
            .iter()
            .find(|(word, _)| rest.starts_with(word))
            .map(|&(_, value)| value);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn digits_only_example() {
        let input = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet";
        assert_eq!(run(input, 1), "142");
    }

    #[test]
    fn spelled_digits_example() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen";
        assert_eq!(run(input, 2), "281");
    }

    #[test]
    fn overlapping_words_resolve_by_position() {
        // "twone" reads 2 first and 1 last
        assert_eq!(calibration_value("twone", true).unwrap(), 21);
        // but part 1 refuses a line without literal digits
        assert!(calibration_value("twone", false).is_err());
    }

    #[test]
    fn single_digit_counts_twice() {
        assert_eq!(calibration_value("abc5def", false).unwrap(), 55);
    }
}
