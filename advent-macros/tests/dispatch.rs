use advent_core::{ParseError, PartSolver, Puzzle, PuzzleInput, SolveError};
use advent_macros::DailyPuzzle;

#[derive(DailyPuzzle)]
#[puzzle(parts = 2)]
struct Doubler;

#[derive(Debug)]
struct Shared {
    values: Vec<i64>,
    doubled: Option<Vec<i64>>,
}

impl PuzzleInput for Doubler {
    type Data<'a> = Shared;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let values = input
            .lines()
            .map(|l| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("expected integer".into()))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(Shared {
            values,
            doubled: None,
        })
    }
}

// Part 1 memoizes the doubled values; part 2 reuses them, so the test also
// covers mutation of the shared data across parts.
impl PartSolver<1> for Doubler {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let doubled = data
            .doubled
            .get_or_insert_with(|| data.values.iter().map(|v| v * 2).collect());
        Ok(doubled.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Doubler {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let doubled = data
            .doubled
            .get_or_insert_with(|| data.values.iter().map(|v| v * 2).collect());
        doubled
            .iter()
            .max()
            .map(|m| m.to_string())
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

#[test]
fn generated_parts_constant() {
    assert_eq!(Doubler::PARTS, 2);
}

#[test]
fn dispatch_reaches_each_part() {
    let mut data = Doubler::parse("1\n2\n3").unwrap();
    assert_eq!(Doubler::solve_part(&mut data, 1).unwrap(), "12");
    assert_eq!(Doubler::solve_part(&mut data, 2).unwrap(), "6");
}

#[test]
fn part_two_sees_part_one_memoization() {
    let mut data = Doubler::parse("4\n5").unwrap();
    assert!(data.doubled.is_none());
    Doubler::solve_part(&mut data, 1).unwrap();
    assert_eq!(data.doubled.as_deref(), Some(&[8, 10][..]));
    assert_eq!(Doubler::solve_part(&mut data, 2).unwrap(), "10");
}

#[test]
fn unknown_part_not_implemented() {
    let mut data = Doubler::parse("1").unwrap();
    assert!(matches!(
        Doubler::solve_part(&mut data, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn failing_part_propagates_error() {
    let mut data = Doubler::parse("").unwrap();
    assert!(matches!(
        Doubler::solve_part(&mut data, 2),
        Err(SolveError::SolveFailed(_))
    ));
}
