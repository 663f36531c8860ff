//! Carve orchestration.
//!
//! `Carver` drives the energy -> locate -> remove cycle for a configured
//! mode and seam count. Shrinking carves the visible image directly.
//! Enlarging runs the same cycle on a working copy while a [`SeamTracker`]
//! carves a coordinate-index grid in lockstep, then widens the original
//! image in a single insertion pass over the resulting removable mask.
//!
//! Configuration is an explicit value handed to the carver; nothing here
//! reads or writes process-wide state.

use crate::carve::insert::insert_marked;
use crate::carve::remove_seam;
use crate::carve::tracker::SeamTracker;
use crate::energy::sobel_energy;
use crate::grid::{Grid, Rgb};
use crate::seam::find_vertical_seam;
use crate::trace::{trace_event, trace_span};
use crate::util::{SeamCarveError, SeamCarveResult};

/// Direction of the resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarveMode {
    /// Remove seams; width decreases by the configured pixel count.
    Shrink,
    /// Duplicate low-importance columns; width increases by the pixel count.
    Enlarge,
}

/// Carve parameters for one run.
#[derive(Clone, Copy, Debug)]
pub struct CarveConfig {
    /// Whether to shrink or enlarge.
    pub mode: CarveMode,
    /// Number of seams to remove or insert. Must be smaller than the input
    /// width in both modes, since enlargement simulates this many removals.
    pub pixels: usize,
    /// Fill energy maps row-parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            mode: CarveMode::Shrink,
            pixels: 0,
            parallel: false,
        }
    }
}

/// Content-aware resizer for a fixed configuration.
pub struct Carver {
    config: CarveConfig,
}

impl Carver {
    /// Creates a carver with the given configuration.
    pub fn new(config: CarveConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// Resizes the image width by the configured pixel count.
    pub fn resize(&self, image: &Grid<Rgb>) -> SeamCarveResult<Grid<Rgb>> {
        self.resize_with_progress(image, |_| {})
    }

    /// Resizes the image, invoking `observer` with the current intermediate
    /// image after every seam operation.
    ///
    /// In enlarge mode the observer sees the virtually shrunk working image
    /// for each simulated removal, then the final widened result.
    pub fn resize_with_progress<F>(
        &self,
        image: &Grid<Rgb>,
        mut observer: F,
    ) -> SeamCarveResult<Grid<Rgb>>
    where
        F: FnMut(&Grid<Rgb>),
    {
        let pixels = self.config.pixels;
        if pixels >= image.width() {
            return Err(SeamCarveError::PixelCountTooLarge {
                pixels,
                width: image.width(),
            });
        }

        let _guard = trace_span!(
            "resize",
            width = image.width() as u64,
            height = image.height() as u64,
            pixels = pixels as u64,
        )
        .entered();

        match self.config.mode {
            CarveMode::Shrink => self.shrink(image, &mut observer),
            CarveMode::Enlarge => self.enlarge(image, &mut observer),
        }
    }

    fn shrink(
        &self,
        image: &Grid<Rgb>,
        observer: &mut dyn FnMut(&Grid<Rgb>),
    ) -> SeamCarveResult<Grid<Rgb>> {
        let mut current = image.clone();
        for carved in 0..self.config.pixels {
            let energy = sobel_energy(&current, self.config.parallel);
            let seam = find_vertical_seam(&energy);
            current = remove_seam(&current, &seam)?;
            trace_event!("seam_removed", carved = carved as u64 + 1, width = current.width() as u64);
            observer(&current);
        }
        Ok(current)
    }

    fn enlarge(
        &self,
        image: &Grid<Rgb>,
        observer: &mut dyn FnMut(&Grid<Rgb>),
    ) -> SeamCarveResult<Grid<Rgb>> {
        let mut tracker = SeamTracker::new(image.width(), image.height())?;
        let mut working = image.clone();
        for carved in 0..self.config.pixels {
            let energy = sobel_energy(&working, self.config.parallel);
            let seam = find_vertical_seam(&energy);
            working = remove_seam(&working, &seam)?;
            tracker.remove(&seam)?;
            trace_event!("seam_tracked", carved = carved as u64 + 1, width = working.width() as u64);
            observer(&working);
        }

        let mask = tracker.removable_mask()?;
        let widened = insert_marked(image, &mask, self.config.pixels)?;
        observer(&widened);
        Ok(widened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pixels_is_the_identity() {
        let image = Grid::filled(4, 3, [9u8, 9, 9]).unwrap();
        let out = Carver::new(CarveConfig::default()).resize(&image).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn rejects_pixel_counts_at_or_above_the_width() {
        let image = Grid::filled(4, 3, [0u8; 3]).unwrap();
        let carver = Carver::new(CarveConfig {
            mode: CarveMode::Shrink,
            pixels: 4,
            parallel: false,
        });
        let err = carver.resize(&image).err().unwrap();
        assert_eq!(err, SeamCarveError::PixelCountTooLarge { pixels: 4, width: 4 });
    }
}
