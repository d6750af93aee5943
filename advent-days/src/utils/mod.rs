//! Shared pieces used by several days

pub mod grid;
pub mod reflection;
