//! Advent of Code puzzle solutions
//!
//! One module per day, each registering itself with the advent-core plugin
//! system through `#[derive(RegisterPuzzle)]`. Shared algorithmic pieces
//! (two-symbol grids, reflection search) live in [`utils`].

pub mod utils;

#[cfg(feature = "year-2023")]
pub mod year_2023;
