//! Virtual seam tracking for enlargement.
//!
//! Removing seams from the actual image would shrink it, which is the
//! opposite of what enlargement needs. The tracker instead carves a parallel
//! coordinate-index grid, where every cell starts out holding its own
//! original position. After `k` simulated removals the grid names exactly the
//! original columns that survived every seam; the complement of that set is
//! the removable mask the inserter consumes.

use crate::carve::remove_seam;
use crate::grid::Grid;
use crate::seam::Seam;
use crate::util::SeamCarveResult;

/// Original image coordinate carried through simulated removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourcePos {
    /// Column in the original image.
    pub x: u32,
    /// Row in the original image.
    pub y: u32,
}

/// Coordinate-index grid carved in lockstep with a working image.
pub struct SeamTracker {
    coords: Grid<SourcePos>,
    source_width: usize,
    source_height: usize,
}

impl SeamTracker {
    /// Creates an identity tracker for an image of the given shape.
    pub fn new(width: usize, height: usize) -> SeamCarveResult<Self> {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(SourcePos {
                    x: x as u32,
                    y: y as u32,
                });
            }
        }
        Ok(Self {
            coords: Grid::from_vec(data, width, height)?,
            source_width: width,
            source_height: height,
        })
    }

    /// Applies one simulated removal to the coordinate grid.
    pub fn remove(&mut self, seam: &Seam) -> SeamCarveResult<()> {
        self.coords = remove_seam(&self.coords, seam)?;
        Ok(())
    }

    /// Returns the surviving original coordinates, one per remaining pixel.
    pub fn coords(&self) -> &Grid<SourcePos> {
        &self.coords
    }

    /// Derives the removable mask over the original image shape: true at
    /// every original coordinate that was selected by some simulated seam.
    pub fn removable_mask(&self) -> SeamCarveResult<Grid<bool>> {
        let mut mask = Grid::filled(self.source_width, self.source_height, true)?;
        for pos in self.coords.data() {
            if let Some(cell) = mask.get_mut(pos.x as usize, pos.y as usize) {
                *cell = false;
            }
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_the_identity_mapping() {
        let tracker = SeamTracker::new(3, 2).unwrap();
        assert_eq!(tracker.coords().get(2, 1), Some(&SourcePos { x: 2, y: 1 }));
        assert!(tracker.removable_mask().unwrap().data().iter().all(|&m| !m));
    }

    #[test]
    fn removal_marks_exactly_the_seam_coordinates() {
        let mut tracker = SeamTracker::new(4, 3).unwrap();
        tracker.remove(&Seam::new(vec![2, 1, 0])).unwrap();

        let mask = tracker.removable_mask().unwrap();
        assert_eq!(mask.row(0), &[false, false, true, false]);
        assert_eq!(mask.row(1), &[false, true, false, false]);
        assert_eq!(mask.row(2), &[true, false, false, false]);
        assert_eq!(tracker.coords().width(), 3);
    }

    #[test]
    fn repeated_removals_accumulate() {
        let mut tracker = SeamTracker::new(4, 2).unwrap();
        tracker.remove(&Seam::new(vec![0, 0])).unwrap();
        tracker.remove(&Seam::new(vec![0, 0])).unwrap();

        let mask = tracker.removable_mask().unwrap();
        assert_eq!(mask.row(0), &[true, true, false, false]);
        assert_eq!(mask.row(1), &[true, true, false, false]);
    }
}
