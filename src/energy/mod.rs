//! Per-pixel importance estimation.
//!
//! Energy is the Euclidean magnitude of 3x3 Sobel gradients computed on the
//! luminance of the image, saturated into `0..=255`. Out-of-bounds kernel
//! samples clamp to the nearest in-bounds row or column, so the map is
//! defined and deterministic for every pixel including borders. The whole
//! stage is a pure function of its input and is recomputed from scratch for
//! every carve iteration.

use crate::grid::{Grid, Rgb};

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

/// Converts an RGB image to 8-bit luminance using Rec. 601 weights.
pub fn luminance(image: &Grid<Rgb>) -> Grid<u8> {
    let data = image
        .data()
        .iter()
        .map(|&[r, g, b]| {
            let weighted =
                299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
            ((weighted + 500) / 1000) as u8
        })
        .collect();
    Grid::from_raw(data, image.width(), image.height())
}

/// Computes the Sobel-magnitude energy map of an image.
///
/// With the `rayon` feature enabled and `parallel` set, rows are filled in
/// parallel; the output is identical to the sequential path.
pub fn sobel_energy(image: &Grid<Rgb>, parallel: bool) -> Grid<u8> {
    let luma = luminance(image);
    let width = luma.width();
    let height = luma.height();
    let mut data = vec![0u8; width * height];

    #[cfg(feature = "rayon")]
    if parallel {
        rayon::fill_rows_par(&luma, &mut data);
        return Grid::from_raw(data, width, height);
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    for (y, out_row) in data.chunks_exact_mut(width).enumerate() {
        energy_row(&luma, y, out_row);
    }
    Grid::from_raw(data, width, height)
}

/// Fills one output row with gradient magnitudes.
pub(crate) fn energy_row(luma: &Grid<u8>, y: usize, out_row: &mut [u8]) {
    let width = luma.width();
    let height = luma.height();
    let up = luma.row(y.saturating_sub(1));
    let mid = luma.row(y);
    let down = luma.row((y + 1).min(height - 1));

    for (x, out) in out_row.iter_mut().enumerate() {
        let xm = x.saturating_sub(1);
        let xp = (x + 1).min(width - 1);

        let (tl, tm, tr) = (i32::from(up[xm]), i32::from(up[x]), i32::from(up[xp]));
        let (ml, mr) = (i32::from(mid[xm]), i32::from(mid[xp]));
        let (bl, bm, br) = (i32::from(down[xm]), i32::from(down[x]), i32::from(down[xp]));

        let gx = (tr + 2 * mr + br) - (tl + 2 * ml + bl);
        let gy = (bl + 2 * bm + br) - (tl + 2 * tm + tr);
        let magnitude = f64::from(gx * gx + gy * gy).sqrt();
        *out = magnitude.min(255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, value: u8) -> Grid<Rgb> {
        Grid::filled(width, height, [value; 3]).unwrap()
    }

    #[test]
    fn uniform_image_has_zero_energy() {
        let energy = sobel_energy(&solid(5, 4, 200), false);
        assert_eq!(energy.width(), 5);
        assert_eq!(energy.height(), 4);
        assert!(energy.data().iter().all(|&e| e == 0));
    }

    #[test]
    fn energy_is_deterministic() {
        let mut data = Vec::new();
        for y in 0..6u8 {
            for x in 0..7u8 {
                data.push([x.wrapping_mul(41), y.wrapping_mul(59), x ^ y]);
            }
        }
        let image = Grid::from_vec(data, 7, 6).unwrap();
        assert_eq!(sobel_energy(&image, false), sobel_energy(&image, false));
    }

    #[test]
    fn vertical_edge_scores_its_flanks() {
        // Bright stripe at column 2 on a black background. The gradient is
        // symmetric at the stripe center, so the flanking columns carry the
        // energy.
        let mut data = vec![[0u8; 3]; 4 * 3];
        for y in 0..3 {
            data[y * 4 + 2] = [255; 3];
        }
        let image = Grid::from_vec(data, 4, 3).unwrap();
        let energy = sobel_energy(&image, false);
        for y in 0..3 {
            assert_eq!(energy.row(y)[0], 0);
            assert_eq!(energy.row(y)[1], 255);
            assert_eq!(energy.row(y)[3], 255);
        }
    }

    #[test]
    fn luminance_weights_green_highest() {
        let image = Grid::from_vec(vec![[255, 0, 0], [0, 255, 0], [0, 0, 255]], 3, 1).unwrap();
        let luma = luminance(&image);
        assert_eq!(luma.row(0), &[76, 150, 29]);
    }

    #[test]
    fn single_pixel_image_is_valid() {
        let energy = sobel_energy(&solid(1, 1, 10), false);
        assert_eq!(energy.data(), &[0]);
    }
}
