//! Procedural tile-based collage generation with looping animations
//!
//! Source images are cropped to a common size, sliced into a grid of tiles,
//! and rearranged onto a canvas by one of several tessellation compositors:
//! strip stitching, circular dot grids, triangular and equilateral lattices,
//! recursive grids and darker/lighter blend merges. A finished composite can
//! be turned into a looping animation by braided toroidal band shifts.
//!
//! Every randomised operation takes an explicit [`rand::Rng`], so runs are
//! reproducible from a seed and independent runs can proceed in parallel.

#![forbid(unsafe_code)]

/// Compositors, blend merges and the animation frame sequencer
pub mod algorithm;
/// Colour statistics of source images
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Geometry utilities for tessellations
pub mod math;
/// Cropping, slicing, masks, shifting and paste operations
pub mod spatial;

pub use algorithm::compositor::Compositor;
pub use io::error::{CollageError, Result};
