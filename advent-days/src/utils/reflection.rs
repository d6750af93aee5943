//! Mirror-line search over rectangular patterns
//!
//! A pattern reflects at split `k` when row `k-1` mirrors row `k`, `k-2`
//! mirrors `k+1`, and so on until the shorter side runs out. The search
//! comes in two modes: exact, and "smudge" mode where the whole mirrored
//! region must contain exactly one mismatched cell. Both modes run off the
//! same mismatch count; only the required total differs.

use crate::utils::grid::Grid;

/// Cells that differ between two same-length lines
fn pair_mismatches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Find the reflection split in a sequence of lines.
///
/// Returns the smallest `k` in `1..len` such that the lines mirror around
/// the boundary between `k-1` and `k`, counting the lines before the
/// mirror; 0 when no split qualifies. With `allow_one_mismatch` the summed
/// mismatch count over every mirrored pair must be exactly 1 — a clean
/// mirror no longer counts, and neither do two mismatches spread over
/// different pairs. Lines past the shorter side are unconstrained.
///
/// Pass a grid's rows for a horizontal mirror, its columns for a vertical
/// one.
pub fn find_reflection(lines: &[Vec<u8>], allow_one_mismatch: bool) -> usize {
    let target = usize::from(allow_one_mismatch);

    for split in 1..lines.len() {
        let span = split.min(lines.len() - split);
        let mut mismatches = 0;
        for i in 0..span {
            mismatches += pair_mismatches(&lines[split - 1 - i], &lines[split + i]);
            if mismatches > target {
                break;
            }
        }
        if mismatches == target {
            return split;
        }
    }
    0
}

/// Score one pattern: `100 *` the row split `+` the column split.
///
/// The puzzle promises exactly one orientation reflects, but that is not
/// checked here; if both splits are non-zero, both are summed.
pub fn score_grid(grid: &Grid, allow_one_mismatch: bool) -> usize {
    let horizontal = find_reflection(grid.rows(), allow_one_mismatch);
    let vertical = find_reflection(&grid.columns(), allow_one_mismatch);
    100 * horizontal + vertical
}

/// Sum of [`score_grid`] over many patterns
pub fn total_score<'a, I>(grids: I, allow_one_mismatch: bool) -> usize
where
    I: IntoIterator<Item = &'a Grid>,
{
    grids
        .into_iter()
        .map(|grid| score_grid(grid, allow_one_mismatch))
        .sum()
}
