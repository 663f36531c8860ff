//! Seam removal and insertion.
//!
//! `remove_seam` is generic over the grid element so the same shift-left
//! splice carves the visible color image and the coordinate-index image that
//! enlargement tracks in lockstep.

use crate::grid::Grid;
use crate::seam::Seam;
use crate::util::{SeamCarveError, SeamCarveResult};

pub mod insert;
pub mod tracker;

/// Removes one seam from a grid, producing a grid one column narrower.
///
/// For each row, columns before the seam are copied unchanged and columns
/// after it shift left by one; row order and the relative order of surviving
/// elements are preserved exactly.
pub fn remove_seam<T: Copy>(image: &Grid<T>, seam: &Seam) -> SeamCarveResult<Grid<T>> {
    let width = image.width();
    let height = image.height();
    if seam.len() != height {
        return Err(SeamCarveError::SeamLengthMismatch {
            expected: height,
            got: seam.len(),
        });
    }
    if width < 2 {
        return Err(SeamCarveError::ImageTooNarrow { width });
    }

    let mut data = Vec::with_capacity((width - 1) * height);
    for (y, row) in image.rows().enumerate() {
        let col = seam.col(y);
        if col >= width {
            return Err(SeamCarveError::SeamOutOfBounds {
                column: col,
                row: y,
                width,
            });
        }
        data.extend_from_slice(&row[..col]);
        data.extend_from_slice(&row[col + 1..]);
    }
    Ok(Grid::from_raw(data, width - 1, height))
}
