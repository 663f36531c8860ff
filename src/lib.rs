//! Seamcarve is a content-aware image resizing library.
//!
//! This crate shrinks or enlarges an image's width one vertical seam at a
//! time: a Sobel-magnitude energy map scores pixel importance, a dynamic
//! program finds the connected top-to-bottom path of minimum cumulative
//! energy, and a generic carve step removes that path. Enlargement tracks
//! simulated removals on a coordinate-index grid and duplicates the marked
//! columns in a single widening pass. Optional parallelism for the energy
//! stage is available via the `rayon` feature; file I/O via `image-io`.

pub mod carve;
pub mod energy;
pub mod grid;
pub mod resize;
pub mod seam;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub mod io;

pub use carve::insert::insert_marked;
pub use carve::remove_seam;
pub use carve::tracker::{SeamTracker, SourcePos};
pub use energy::{luminance, sobel_energy};
pub use grid::{Grid, Rgb};
pub use resize::{CarveConfig, CarveMode, Carver};
pub use seam::{find_vertical_seam, Seam};
pub use util::{SeamCarveError, SeamCarveResult};
