//! Local store for puzzle input files
//!
//! Inputs live under `{root}/{year}/day{DD}.txt`; with test mode on, the
//! `{root}/{year}/test/day{DD}.txt` subtree is read instead so example
//! inputs can sit next to the real ones.

use crate::error::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based puzzle input store
pub struct InputStore {
    root: PathBuf,
    test_inputs: bool,
}

impl InputStore {
    /// Create a store rooted at `root`
    pub fn new(root: PathBuf, test_inputs: bool) -> Self {
        Self { root, test_inputs }
    }

    /// Expected path of the input for a year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        let mut path = self.root.join(year.to_string());
        if self.test_inputs {
            path.push("test");
        }
        path.push(format!("day{:02}.txt", day));
        path
    }

    /// Whether the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input, or None if the file does not exist
    pub fn read(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    /// The store root
    pub fn root(&self) -> &Path {
        &self.root
    }
}
