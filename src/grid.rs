//! Owned 2-D grids.
//!
//! `Grid<T>` is a contiguous row-major buffer with validated dimensions. The
//! same type carries the color image (`Grid<Rgb>`), the per-pixel energy map
//! (`Grid<u8>`), the coordinate-index image used by enlargement, and the
//! removable mask (`Grid<bool>`). Width only ever changes by building a new
//! grid; nothing resizes in place.

use crate::util::{SeamCarveError, SeamCarveResult};

/// Interleaved 8-bit RGB pixel.
pub type Rgb = [u8; 3];

/// Owned row-major 2-D grid with a validated shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Grid<T> {
    /// Creates a grid from a row-major buffer of exactly `width * height`
    /// elements.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> SeamCarveResult<Self> {
        let expected = checked_area(width, height)?;
        if data.len() != expected {
            return Err(SeamCarveError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> SeamCarveResult<Self> {
        let area = checked_area(width, height)?;
        Ok(Self {
            data: vec![value; area],
            width,
            height,
        })
    }

    /// Builds a grid whose shape is already known to be valid, e.g. derived
    /// from an existing grid.
    pub(crate) fn from_raw(data: Vec<T>, width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the grid width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the backing row-major slice.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    // All index math lives here.
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index(x, y))
    }

    /// Returns a mutable reference to the element at `(x, y)` if it is within
    /// bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        self.data.get_mut(idx)
    }

    /// Returns row `y` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width)
    }
}

fn checked_area(width: usize, height: usize) -> SeamCarveResult<usize> {
    if width == 0 || height == 0 {
        return Err(SeamCarveError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(SeamCarveError::InvalidDimensions { width, height })
}
