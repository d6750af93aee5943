use advent_core::{DynPuzzle, ParseError, PartSolver, PuzzleInput, RegistryBuilder, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 1)]
#[register(year = 2017, day = 3, tags = ["macro-test", "tagged"])]
struct Tagged;

impl PuzzleInput for Tagged {
    type Data<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Tagged {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.chars().rev().collect())
    }
}

// No tags attribute at all
#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 1)]
#[register(year = 2017, day = 4)]
struct Untagged;

impl PuzzleInput for Untagged {
    type Data<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.len().to_string())
    }
}

#[test]
fn derived_plugins_are_collected() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.contains(2017, 3));
    assert!(registry.contains(2017, 4));

    let mut puzzle = registry.create(2017, 3, " abc ").unwrap();
    assert_eq!(puzzle.solve(1).unwrap().answer, "cba");
}

#[test]
fn tag_filter_selects_plugins() {
    let registry = RegistryBuilder::new()
        .register_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.contains(2017, 3));
    assert!(!registry.contains(2017, 4));
}

#[test]
fn plugin_metadata_matches_attribute() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let info = registry.get_info(2017, 3).unwrap();
    assert_eq!(info.parts, 1);
}
