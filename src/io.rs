//! Image decode/encode helpers via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. The carving core never
//! touches files; these helpers bridge between on-disk formats and
//! [`Grid<Rgb>`] buffers for shells like `seamcarve-cli`.

use crate::grid::{Grid, Rgb};
use crate::util::{SeamCarveError, SeamCarveResult};
use std::path::Path;

/// Creates a grid from an 8-bit RGB image buffer.
pub fn grid_from_rgb_image(img: &image::RgbImage) -> SeamCarveResult<Grid<Rgb>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<Rgb> = img.pixels().map(|pixel| pixel.0).collect();
    Grid::from_vec(data, width, height)
}

/// Creates an 8-bit RGB image buffer from a grid.
pub fn rgb_image_from_grid(grid: &Grid<Rgb>) -> image::RgbImage {
    let mut out = image::RgbImage::new(grid.width() as u32, grid.height() as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &pixel) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, image::Rgb(pixel));
        }
    }
    out
}

/// Loads an image from disk and converts it to an RGB grid.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> SeamCarveResult<Grid<Rgb>> {
    let img = image::open(path).map_err(|err| SeamCarveError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_rgb_image(&img.to_rgb8())
}

/// Encodes a grid to disk; the format follows the path extension.
pub fn save_rgb_image<P: AsRef<Path>>(path: P, grid: &Grid<Rgb>) -> SeamCarveResult<()> {
    rgb_image_from_grid(grid)
        .save(path)
        .map_err(|err| SeamCarveError::ImageIo {
            reason: err.to_string(),
        })
}
