//! Solutions for Advent of Code 2023
//!
//! Days 10 and 12 were never solved; the modules here cover the rest of the
//! first half of the month.

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_11;
pub mod day_13;
