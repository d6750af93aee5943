//! Daily puzzle solver framework
//!
//! A small trait-based framework for Advent-of-Code-style puzzles: each
//! puzzle parses its input once into a shared data structure and then
//! answers one or more numbered parts from it.
//!
//! # Overview
//!
//! - [`PuzzleInput`] defines the parsed data type (which may borrow from the
//!   raw input) and the parsing step.
//! - [`PartSolver`] is implemented once per part, with the part number as a
//!   const generic so a missing part is a compile error at the use site.
//! - [`Puzzle`] ties the parts together behind a runtime `solve_part`
//!   dispatch; it is usually generated by `#[derive(DailyPuzzle)]`.
//! - [`PuzzleInstance`] holds the parsed data together with parse timing and
//!   is used through the type-erased [`DynPuzzle`] trait.
//! - [`PuzzleRegistry`] maps (year, day) to puzzle factories; puzzles
//!   annotated with `#[derive(RegisterPuzzle)]` are collected through
//!   `inventory` and registered in bulk, optionally filtered by tag.
//!
//! # Quick example
//!
//! ```
//! use advent_core::{DynPuzzle, ParseError, PartSolver, Puzzle, PuzzleInput, RegistryBuilder, SolveError};
//!
//! struct Day1;
//!
//! impl PuzzleInput for Day1 {
//!     type Data<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
//!         Ok(data.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl Puzzle for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => <Self as PartSolver<1>>::solve(data),
//!             other => Err(SolveError::PartNotImplemented(other)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//! let mut puzzle = registry.create(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(puzzle.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, PuzzleError, RegistrationError, SolveError};
pub use instance::{DynPuzzle, PuzzleInstance, SolveOutcome};
pub use registry::{
    PuzzleFactory, PuzzleInfo, PuzzlePlugin, PuzzleRegistry, RegisterablePuzzle, RegistryBuilder,
};
pub use solver::{PartSolver, Puzzle, PuzzleExt, PuzzleInput};

// Re-exported for the derive macros, which expand to
// `::advent_core::inventory::submit!`.
pub use inventory;

pub use advent_macros::{DailyPuzzle, RegisterPuzzle};
