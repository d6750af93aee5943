//! Error types for the puzzle framework

use thiserror::Error;

/// Error type for parsing raw puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// A required section or value is absent
    #[error("missing data: {0}")]
    MissingData(String),
    /// Anything else
    #[error("parse error: {0}")]
    Other(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number has no `PartSolver` implementation
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number falls outside `1..=PARTS`
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part solver itself failed
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for registry operations
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// No puzzle registered for the given year and day
    #[error("no puzzle registered for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day outside the supported storage range
    #[error("year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Solving a part failed
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A puzzle is already registered for this year and day
    #[error("duplicate puzzle registration for year {0} day {1}")]
    Duplicate(u16, u8),
    /// Year or day outside the supported storage range
    #[error("cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
