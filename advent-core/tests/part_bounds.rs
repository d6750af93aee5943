//! Property tests for the bounded part dispatch

use advent_core::{ParseError, Puzzle, PuzzleExt, PuzzleInput, SolveError};
use proptest::prelude::*;

/// Test puzzle with a configurable part count
struct TestPuzzle<const N: u8>;

impl<const N: u8> PuzzleInput for TestPuzzle<N> {
    type Data<'a> = ();

    fn parse(_input: &str) -> Result<Self::Data<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Puzzle for TestPuzzle<N> {
    const PARTS: u8 = N;

    fn solve_part(_data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn solve_bounded<const N: u8>(part: u8) -> Result<String, SolveError> {
    let mut data = ();
    TestPuzzle::<N>::solve_part_bounded(&mut data, part)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts above PARTS are rejected with `PartOutOfRange`,
    /// carrying the offending part number.
    #[test]
    fn out_of_range_parts_rejected(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => solve_bounded::<1>(part),
            2 => solve_bounded::<2>(part),
            _ => solve_bounded::<3>(part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// Inside `1..=PARTS` the bounded entry point is just a pass-through
    /// to `solve_part`.
    #[test]
    fn in_range_parts_delegate(part in 1u8..=2) {
        let bounded = solve_bounded::<2>(part);

        let mut data = ();
        let direct = TestPuzzle::<2>::solve_part(&mut data, part);

        prop_assert_eq!(bounded.unwrap(), direct.unwrap());
    }
}

#[test]
fn part_zero_rejected() {
    assert!(matches!(
        solve_bounded::<2>(0),
        Err(SolveError::PartOutOfRange(0))
    ));
}

#[test]
fn part_above_max_rejected() {
    assert!(matches!(
        solve_bounded::<2>(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn valid_part_succeeds() {
    assert_eq!(solve_bounded::<2>(1).unwrap(), "part1");
}
