//! Core puzzle traits

use crate::error::{ParseError, SolveError};

/// Parsing side of a puzzle: turns the raw input text into the data the
/// part solvers work on.
///
/// The parsed type is generic over the input lifetime, so a puzzle can pick
/// its ownership strategy:
/// - owned storage (`Vec<T>`, custom structs) when parsing transforms the
///   input anyway, or when parts mutate the data;
/// - borrowed storage (`Vec<&'a str>`, `&'a str`) for zero-copy parsing.
///
/// # Example
///
/// ```
/// use advent_core::{ParseError, PuzzleInput};
///
/// struct Day1;
///
/// impl PuzzleInput for Day1 {
///     type Data<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
/// ```
pub trait PuzzleInput {
    /// Parsed input plus whatever intermediate state the parts share.
    type Data<'a>;

    /// Parse the raw input.
    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError>;
}

/// One part of a puzzle, identified by the const generic part number.
///
/// Implementing `PartSolver<1>` and `PartSolver<2>` separately keeps each
/// part a standalone function while still sharing the parsed data; the
/// `Puzzle` impl (usually derived) dispatches between them at runtime.
///
/// # Example
///
/// ```
/// use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
///
/// struct Day1;
///
/// impl PuzzleInput for Day1 {
///     type Data<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("expected integer".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
///         Ok(data.iter().sum::<i64>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const PART: u8>: PuzzleInput {
    /// Solve this part.
    ///
    /// The data is mutable so parts can memoize work shared with a later
    /// part (see `Data`'s ownership notes on [`PuzzleInput`]).
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: a part count and a runtime dispatch over its parts.
///
/// Hand-written impls match on the part number and forward to the
/// [`PartSolver`] impls; `#[derive(DailyPuzzle)]` with
/// `#[puzzle(parts = N)]` generates exactly that match.
pub trait Puzzle: PuzzleInput {
    /// Number of parts this puzzle answers.
    const PARTS: u8;

    /// Solve the given part.
    ///
    /// # Returns
    /// * `Ok(String)` - the answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - no such part
    /// * `Err(SolveError::SolveFailed)` - the part solver failed
    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension adding a bounds check in front of the dispatch.
pub trait PuzzleExt: Puzzle {
    /// Reject parts outside `1..=PARTS` before dispatching.
    fn solve_part_bounded(data: &mut Self::Data<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(data, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<P: Puzzle + ?Sized> PuzzleExt for P {}
