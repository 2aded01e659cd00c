//! Triangular tiling: every grid cell split into two unrelated halves

use crate::io::configuration::TRIANGLE_BACKGROUND;
use crate::io::error::{Result, degenerate};
use crate::math::geometry::floor_sqrt;
use crate::spatial::canvas::{blank_canvas, paste, paste_masked};
use crate::spatial::crop::crop_uniform;
use crate::spatial::masks::{Diagonal, ShapeKind, make_mask};
use crate::spatial::tiles::{TilePool, ensure_tile_fits, slice_grid};
use image::RgbImage;
use rand::Rng;
use tracing::debug;

/// Fill a square grid with pairs of right-triangle fragments
///
/// One diagonal is chosen for the whole run. Each cell first receives a tile
/// from a second, independent full pool as an opaque base, then a tile from
/// the first pool through the triangle mask. The base shows through wherever
/// the mask is not fully opaque, so anti-aliased diagonals never reveal the
/// background. Cells are filled while both pools still hold tiles.
///
/// # Errors
///
/// Returns an error if `images` is empty, `pixels` is zero, or `pixels`
/// exceeds the cropped width or height
pub fn tri_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let cropped = crop_uniform(images, rng)?;
    ensure_tile_fits(&cropped, (pixels, pixels))?;

    let diagonal = if rng.random_bool(0.5) {
        Diagonal::Upper
    } else {
        Diagonal::Lower
    };
    let mask = make_mask(ShapeKind::RightTriangle(diagonal), (pixels, pixels))?;

    let tiles = slice_grid(&cropped, (pixels, pixels))?;
    let side = floor_sqrt(tiles.len()) as u32;
    if side == 0 {
        return Err(degenerate("tristitch", &"no complete tile fits the crop"));
    }
    debug!(tiles = tiles.len(), grid = side, ?diagonal, "placing triangle pairs");

    let extent = side * pixels;
    let mut canvas = blank_canvas(extent, extent, TRIANGLE_BACKGROUND);
    let mut primary = TilePool::new(tiles.clone());
    let mut secondary = TilePool::new(tiles);

    for row in 0..side {
        for column in 0..side {
            let (Some(first), Some(second)) = (primary.draw(rng), secondary.draw(rng)) else {
                continue;
            };
            let (x, y) = (i64::from(column * pixels), i64::from(row * pixels));
            let (Some(base), Some(fragment)) =
                (second.materialize(&cropped), first.materialize(&cropped))
            else {
                continue;
            };
            paste(&mut canvas, &base, x, y);
            paste_masked(&mut canvas, &fragment, &mask, x, y);
        }
    }

    Ok(canvas)
}
