//! Puzzle instances and the type-erased runtime interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Puzzle, PuzzleExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer to one part, with timing
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving finished (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveOutcome {
    /// Time spent solving
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle for one year/day, ready to answer its parts.
///
/// Parsing happens in the constructor; the parse timestamps are recorded so
/// callers can report parse time separately from solve time.
pub struct PuzzleInstance<'a, P: Puzzle> {
    year: u16,
    day: u8,
    data: P::Data<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Parse `input` and build an instance.
    ///
    /// # Returns
    /// * `Ok(PuzzleInstance)` - parsed, with parse timing recorded
    /// * `Err(ParseError)` - the input was rejected
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let data = P::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            data,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface over any [`PuzzleInstance`].
///
/// The registry hands out `Box<dyn DynPuzzle>` so callers can run puzzles
/// with different data types uniformly.
///
/// # Example
///
/// ```no_run
/// use advent_core::DynPuzzle;
///
/// fn run(mut puzzle: Box<dyn DynPuzzle + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=puzzle.parts() {
///         let outcome = puzzle.solve(part)?;
///         println!("part {part}: {} ({:?})", outcome.answer, outcome.duration());
///     }
///     println!("parse took {:?}", puzzle.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynPuzzle {
    /// Solve the given part, with timing.
    ///
    /// Parts outside `1..=parts()` yield `SolveError::PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<SolveOutcome, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// The puzzle's year
    fn year(&self) -> u16;

    /// The puzzle's day
    fn day(&self) -> u8;

    /// Number of parts this puzzle answers
    fn parts(&self) -> u8;

    /// Time spent parsing
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, P: Puzzle> DynPuzzle for PuzzleInstance<'a, P> {
    fn solve(&mut self, part: u8) -> Result<SolveOutcome, SolveError> {
        let solve_start = Utc::now();
        let answer = P::solve_part_bounded(&mut self.data, part)?;
        let solve_end = Utc::now();

        Ok(SolveOutcome {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}
