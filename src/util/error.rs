//! Error types for seamcarve.

use thiserror::Error;

/// Result alias for seamcarve operations.
pub type SeamCarveResult<T> = std::result::Result<T, SeamCarveError>;

/// Errors that can occur when constructing grids or carving seams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeamCarveError {
    /// A grid was requested with zero width or height.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// A backing buffer does not match the requested grid shape.
    #[error("buffer length {got} does not match {expected} elements")]
    SizeMismatch {
        /// Element count implied by width * height.
        expected: usize,
        /// Element count actually supplied.
        got: usize,
    },
    /// Two grids that must share a shape do not.
    #[error("grid shape {width}x{height} does not match expected {expected_width}x{expected_height}")]
    ShapeMismatch {
        /// Expected width.
        expected_width: usize,
        /// Expected height.
        expected_height: usize,
        /// Actual width.
        width: usize,
        /// Actual height.
        height: usize,
    },
    /// The image is too narrow for a seam to be removed from it.
    #[error("cannot remove a seam from an image of width {width}")]
    ImageTooNarrow {
        /// Actual input width.
        width: usize,
    },
    /// A seam does not carry one column index per image row.
    #[error("seam length {got} does not match image height {expected}")]
    SeamLengthMismatch {
        /// Image height.
        expected: usize,
        /// Seam length.
        got: usize,
    },
    /// A seam column index lies outside the image.
    #[error("seam column {column} at row {row} is outside width {width}")]
    SeamOutOfBounds {
        /// Offending column index.
        column: usize,
        /// Row at which it occurs.
        row: usize,
        /// Image width.
        width: usize,
    },
    /// The requested seam count cannot be carved from the image.
    #[error("cannot carve {pixels} seams from an image of width {width}")]
    PixelCountTooLarge {
        /// Requested number of seams.
        pixels: usize,
        /// Image width.
        width: usize,
    },
    /// Image decode or encode failure (feature `image-io`).
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo {
        /// Human-readable failure description.
        reason: String,
    },
}
