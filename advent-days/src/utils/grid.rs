//! Rectangular two-symbol grids
//!
//! Several puzzles hand out maps drawn with `#` and `.`. [`Grid`] validates
//! the drawing once at construction; everything downstream can then index
//! freely without re-checking shape.

use thiserror::Error;

/// The two cell symbols a [`Grid`] accepts
pub const MARK: u8 = b'#';
/// See [`MARK`]
pub const BLANK: u8 = b'.';

/// Rejected grid drawings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows at all
    #[error("grid has no rows")]
    Empty,
    /// A row's width differs from the first row's
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell is neither `#` nor `.`
    #[error("unsupported symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { symbol: char, row: usize, col: usize },
}

/// A validated rectangular grid of `#`/`.` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Grid {
    /// Build a grid from text lines, validating shape and symbols.
    ///
    /// # Returns
    /// * `Ok(Grid)` - non-empty, rectangular, drawn with `#` and `.` only
    /// * `Err(GridError)` - which invariant failed, and where
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        let mut width = 0;

        for (row, line) in lines.into_iter().enumerate() {
            if row == 0 {
                width = line.len();
            } else if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            for (col, &symbol) in line.as_bytes().iter().enumerate() {
                if symbol != MARK && symbol != BLANK {
                    return Err(GridError::InvalidSymbol {
                        symbol: symbol as char,
                        row,
                        col,
                    });
                }
            }
            rows.push(line.as_bytes().to_vec());
        }

        if rows.is_empty() || width == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self { rows, width })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The rows, top to bottom
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// The columns, left to right (a transposed copy)
    pub fn columns(&self) -> Vec<Vec<u8>> {
        (0..self.width)
            .map(|col| self.rows.iter().map(|row| row[col]).collect())
            .collect()
    }

    /// `(x, y)` positions of every cell drawn with `symbol`
    pub fn positions(&self, symbol: u8) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &cell)| cell == symbol)
                .map(move |(x, _)| (x, y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rectangular_two_symbol_grid() {
        let grid = Grid::from_lines(["#.#", "...", "##."]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[2], b"##.".to_vec());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(Grid::from_lines(Vec::<&str>::new()), Err(GridError::Empty));
        assert_eq!(Grid::from_lines([""]), Err(GridError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            Grid::from_lines(["##", "#"]),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_foreign_symbols() {
        assert_eq!(
            Grid::from_lines(["#.", ".x"]),
            Err(GridError::InvalidSymbol {
                symbol: 'x',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn columns_transpose_rows() {
        let grid = Grid::from_lines(["#.", "..", "##"]).unwrap();
        assert_eq!(grid.columns(), vec![b"#.#".to_vec(), b"..#".to_vec()]);
    }

    #[test]
    fn positions_walk_in_row_order() {
        let grid = Grid::from_lines(["#.", ".#"]).unwrap();
        let marks: Vec<_> = grid.positions(MARK).collect();
        assert_eq!(marks, vec![(0, 0), (1, 1)]);
    }
}
