//! Vertical seam search.
//!
//! A seam is a connected top-to-bottom path, one column per row, where
//! adjacent rows differ by at most one column. The locator runs a forward
//! dynamic program over the energy map: `cost[y][x]` is the minimum
//! cumulative energy of any valid path ending at `(x, y)`, with the chosen
//! predecessor offset recorded in a direction table for backtracking.
//!
//! Predecessor offsets are examined in the order -1, 0, +1 and the first
//! minimum wins, so ties resolve toward the left. The bottom endpoint is the
//! last row's minimum cumulative cost, lowest column on ties. Both rules keep
//! seam selection fully deterministic.

use crate::grid::Grid;

/// A top-to-bottom seam: one column index per image row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seam {
    cols: Vec<usize>,
}

impl Seam {
    /// Wraps a column-per-row sequence as a seam.
    ///
    /// Bounds and length are validated by the operations that consume the
    /// seam, not here.
    pub fn new(cols: Vec<usize>) -> Self {
        Self { cols }
    }

    /// Returns the number of rows the seam spans.
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Returns true if the seam spans no rows.
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Returns the seam column at row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= len()`.
    pub fn col(&self, y: usize) -> usize {
        self.cols[y]
    }

    /// Returns the column indices ordered from the top row down.
    pub fn as_slice(&self) -> &[usize] {
        &self.cols
    }
}

/// Finds the vertical seam of minimum cumulative energy.
///
/// Always succeeds for a valid energy map; a one-column map yields the
/// trivial straight seam.
pub fn find_vertical_seam(energy: &Grid<u8>) -> Seam {
    let width = energy.width();
    let height = energy.height();

    // Full direction table for backtracking; cumulative costs only need the
    // previous row.
    let mut dir = vec![0i8; width * height];
    let mut prev_cost: Vec<u32> = energy.row(0).iter().map(|&e| u32::from(e)).collect();
    let mut cost = vec![0u32; width];

    for y in 1..height {
        let row = energy.row(y);
        let dir_row = &mut dir[y * width..(y + 1) * width];
        for x in 0..width {
            let mut best = u32::MAX;
            let mut best_offset = 0i8;
            for offset in -1i32..=1 {
                let px = x as i32 + offset;
                if px < 0 || px >= width as i32 {
                    continue;
                }
                let c = prev_cost[px as usize];
                if c < best {
                    best = c;
                    best_offset = offset as i8;
                }
            }
            dir_row[x] = best_offset;
            cost[x] = best + u32::from(row[x]);
        }
        std::mem::swap(&mut prev_cost, &mut cost);
    }

    let mut cur = 0usize;
    let mut best = prev_cost[0];
    for (x, &c) in prev_cost.iter().enumerate().skip(1) {
        if c < best {
            best = c;
            cur = x;
        }
    }

    let mut cols = vec![0usize; height];
    for y in (0..height).rev() {
        cols[y] = cur;
        let offset = dir[y * width + cur];
        cur = (cur as i64 + i64::from(offset)) as usize;
    }
    Seam::new(cols)
}
