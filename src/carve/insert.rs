//! Widening pass for enlargement.

use crate::grid::Grid;
use crate::util::{SeamCarveError, SeamCarveResult};

/// Widens a grid by duplicating every masked pixel immediately to its right.
///
/// `mask` must share the grid's shape and is expected to mark `extra` cells
/// per row (one per simulated seam). Each row is emitted left to right behind
/// an output cursor; writes clamp to the output width and any shortfall is
/// padded with the row's last pixel, so a malformed mask degrades into a
/// clipped row rather than an out-of-bounds write.
pub fn insert_marked<T: Copy>(
    image: &Grid<T>,
    mask: &Grid<bool>,
    extra: usize,
) -> SeamCarveResult<Grid<T>> {
    let width = image.width();
    let height = image.height();
    if mask.width() != width || mask.height() != height {
        return Err(SeamCarveError::ShapeMismatch {
            expected_width: width,
            expected_height: height,
            width: mask.width(),
            height: mask.height(),
        });
    }

    let out_width = width + extra;
    let mut data = Vec::with_capacity(out_width * height);
    for (row, mask_row) in image.rows().zip(mask.rows()) {
        let row_start = data.len();
        for (&pixel, &removable) in row.iter().zip(mask_row) {
            if data.len() - row_start < out_width {
                data.push(pixel);
            }
            if removable && data.len() - row_start < out_width {
                data.push(pixel);
            }
        }
        while data.len() - row_start < out_width {
            data.push(row[width - 1]);
        }
    }
    Ok(Grid::from_raw(data, out_width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_marked_pixels_to_the_right() {
        let image = Grid::from_vec(vec![1u8, 2, 3, 4], 4, 1).unwrap();
        let mask = Grid::from_vec(vec![false, true, false, true], 4, 1).unwrap();

        let wide = insert_marked(&image, &mask, 2).unwrap();
        assert_eq!(wide.width(), 6);
        assert_eq!(wide.row(0), &[1, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn zero_extra_with_empty_mask_is_identity() {
        let image = Grid::from_vec(vec![5u8, 6, 7], 3, 1).unwrap();
        let mask = Grid::filled(3, 1, false).unwrap();
        let wide = insert_marked(&image, &mask, 0).unwrap();
        assert_eq!(wide, image);
    }

    #[test]
    fn over_marked_rows_clamp_to_the_output_width() {
        let image = Grid::from_vec(vec![1u8, 2], 2, 1).unwrap();
        let mask = Grid::from_vec(vec![true, true], 2, 1).unwrap();
        let wide = insert_marked(&image, &mask, 1).unwrap();
        assert_eq!(wide.row(0), &[1, 1, 2]);
    }

    #[test]
    fn under_marked_rows_pad_with_the_last_pixel() {
        let image = Grid::from_vec(vec![1u8, 2], 2, 1).unwrap();
        let mask = Grid::filled(2, 1, false).unwrap();
        let wide = insert_marked(&image, &mask, 1).unwrap();
        assert_eq!(wide.row(0), &[1, 2, 2]);
    }

    #[test]
    fn rejects_mismatched_mask_shape() {
        let image = Grid::filled(3, 2, 0u8).unwrap();
        let mask = Grid::filled(2, 2, false).unwrap();
        let err = insert_marked(&image, &mask, 1).err().unwrap();
        assert_eq!(
            err,
            SeamCarveError::ShapeMismatch {
                expected_width: 3,
                expected_height: 2,
                width: 2,
                height: 2,
            }
        );
    }
}
