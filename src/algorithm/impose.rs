//! Impose variants: two independent composites merged with one blend draw

use crate::algorithm::blend::{BlendMode, blend};
use crate::algorithm::stitch::{StripAxis, grid_stitch, strip_stitch};
use crate::io::error::Result;
use image::RgbImage;
use rand::Rng;
use tracing::debug;

/// Blend two independent grid-of-grids composites
///
/// # Errors
///
/// Returns an error if either grid stitch fails
pub fn grid_impose<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let base = grid_stitch(images, pixels, rng)?;
    let overlay = grid_stitch(images, pixels, rng)?;
    let mode = BlendMode::random(rng);
    debug!(?mode, "imposing grid stitches");
    Ok(blend(&base, &overlay, mode))
}

/// Blend a horizontal strip stitch with a randomly oriented strip stitch
///
/// # Errors
///
/// See [`strip_impose`]
pub fn himpose<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    strip_impose(images, pixels, StripAxis::Horizontal, rng)
}

/// Blend a vertical strip stitch with a randomly oriented strip stitch
///
/// # Errors
///
/// See [`strip_impose`]
pub fn vimpose<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    strip_impose(images, pixels, StripAxis::Vertical, rng)
}

/// Blend a strip stitch along `base_axis` with one along a random axis
///
/// When the overlay runs across the base the two differ in shape and only
/// their common top-left region survives the blend.
///
/// # Errors
///
/// Returns an error if either strip stitch fails
pub fn strip_impose<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    base_axis: StripAxis,
    rng: &mut R,
) -> Result<RgbImage> {
    let base = strip_stitch(images, pixels, base_axis, rng)?;
    let overlay_axis = if rng.random_bool(0.5) {
        StripAxis::Horizontal
    } else {
        StripAxis::Vertical
    };
    let overlay = strip_stitch(images, pixels, overlay_axis, rng)?;
    let mode = BlendMode::random(rng);
    debug!(?base_axis, ?overlay_axis, ?mode, "imposing strip stitches");
    Ok(blend(&base, &overlay, mode))
}
