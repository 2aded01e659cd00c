//! Strip stitching and the recursive grid-of-grids built from it
//!
//! A strip spans the full crop along one axis and `pixels` along the other.
//! Half of all available strips are sampled without replacement and laid
//! end to end along the growth axis, each with an even chance of being
//! mirrored across its long axis.

use crate::io::configuration::STRIP_BACKGROUND;
use crate::io::error::{Result, degenerate};
use crate::spatial::canvas::{blank_canvas, paste};
use crate::spatial::crop::crop_uniform;
use crate::spatial::tiles::{TilePool, ensure_tile_fits, slice_grid};
use image::{RgbImage, imageops};
use rand::Rng;
use tracing::debug;

/// Axis along which strips are laid end to end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAxis {
    /// Full-width strips stacked top to bottom
    Horizontal,
    /// Full-height strips placed left to right
    Vertical,
}

impl StripAxis {
    /// The orthogonal axis
    #[must_use]
    pub const fn transposed(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "hstitch",
            Self::Vertical => "vstitch",
        }
    }
}

/// Stitch half of all available strips along `axis`
///
/// The canvas keeps the crop's extent across the strips and grows by
/// `pixels` per sampled strip along `axis`.
///
/// # Errors
///
/// Returns an error if:
/// - `images` is empty or `pixels` is zero
/// - `pixels` exceeds the cropped extent along `axis`
/// - Fewer than two strips are available, leaving nothing to sample
pub fn strip_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    axis: StripAxis,
    rng: &mut R,
) -> Result<RgbImage> {
    let cropped = crop_uniform(images, rng)?;
    let (width, height) = cropped
        .first()
        .map(RgbImage::dimensions)
        .unwrap_or_default();

    let strip = match axis {
        StripAxis::Horizontal => (width, pixels),
        StripAxis::Vertical => (pixels, height),
    };
    ensure_tile_fits(&cropped, strip)?;

    let strips = slice_grid(&cropped, strip)?;
    let total = strips.len();
    let sampled = TilePool::new(strips).sample(total / 2, rng);
    if sampled.is_empty() {
        return Err(degenerate(
            axis.name(),
            &format!("{total} strip(s) available, none sampled"),
        ));
    }
    debug!(
        compositor = axis.name(),
        available = total,
        sampled = sampled.len(),
        "stitching strips"
    );

    let length = sampled.len() as u32 * pixels;
    let mut canvas = match axis {
        StripAxis::Horizontal => blank_canvas(width, length, STRIP_BACKGROUND),
        StripAxis::Vertical => blank_canvas(length, height, STRIP_BACKGROUND),
    };

    let mut offset = 0i64;
    for tile in &sampled {
        let Some(mut strip_pixels) = tile.materialize(&cropped) else {
            continue;
        };
        if rng.random_bool(0.5) {
            match axis {
                StripAxis::Horizontal => imageops::flip_vertical_in_place(&mut strip_pixels),
                StripAxis::Vertical => imageops::flip_horizontal_in_place(&mut strip_pixels),
            }
        }
        match axis {
            StripAxis::Horizontal => paste(&mut canvas, &strip_pixels, 0, offset),
            StripAxis::Vertical => paste(&mut canvas, &strip_pixels, offset, 0),
        }
        offset += i64::from(pixels);
    }

    Ok(canvas)
}

/// Stitch full-width strips top to bottom
///
/// # Errors
///
/// See [`strip_stitch`]
pub fn hstitch<R: Rng + ?Sized>(images: &[RgbImage], pixels: u32, rng: &mut R) -> Result<RgbImage> {
    strip_stitch(images, pixels, StripAxis::Horizontal, rng)
}

/// Stitch full-height strips left to right
///
/// # Errors
///
/// See [`strip_stitch`]
pub fn vstitch<R: Rng + ?Sized>(images: &[RgbImage], pixels: u32, rng: &mut R) -> Result<RgbImage> {
    strip_stitch(images, pixels, StripAxis::Vertical, rng)
}

/// Stitch two strip-stitched composites together along the orthogonal axis
///
/// The inner axis is chosen at random. Two independent composites are built
/// along it and then treated as sources for one more stitch across it,
/// producing a 2x1 or 1x2 grid of grids.
///
/// # Errors
///
/// Returns an error if either inner or outer stitch fails
pub fn grid_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let inner = if rng.random_bool(0.5) {
        StripAxis::Horizontal
    } else {
        StripAxis::Vertical
    };
    debug!(inner = inner.name(), "building grid of grids");

    let first = strip_stitch(images, pixels, inner, rng)?;
    let second = strip_stitch(images, pixels, inner, rng)?;
    strip_stitch(&[first, second], pixels, inner.transposed(), rng)
}
