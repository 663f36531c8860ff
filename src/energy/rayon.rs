//! Row-parallel energy fill (feature-gated).
//!
//! Rows of the energy map are independent of each other, unlike the seam DP,
//! so this is the one stage that parallelizes cleanly. Each worker fills
//! complete output rows; the result is bit-identical to the sequential path.

use crate::energy::energy_row;
use crate::grid::Grid;
use rayon::prelude::*;

/// Fills all rows of `out` with gradient magnitudes in parallel.
pub(crate) fn fill_rows_par(luma: &Grid<u8>, out: &mut [u8]) {
    let width = luma.width();
    out.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| energy_row(luma, y, out_row));
}
