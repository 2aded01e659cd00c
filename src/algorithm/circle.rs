//! Circular dot grids and their offset merge

use crate::algorithm::blend::{BlendMode, blend};
use crate::analysis::palette::dominant_color;
use crate::io::error::{Result, degenerate};
use crate::math::geometry::floor_sqrt;
use crate::spatial::canvas::paste_masked;
use crate::spatial::crop::crop_uniform;
use crate::spatial::masks::{ShapeKind, make_mask};
use crate::spatial::shift::{Direction, toroidal_shift};
use crate::spatial::tiles::{TilePool, ensure_tile_fits, slice_grid};
use image::{Rgb, RgbImage};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Square grid of disc-masked tiles over the sources' dominant colour
///
/// The grid side is `floor(sqrt(tiles))`. Cells are filled row by row with
/// tiles drawn without replacement; a cell left without a tile shows the
/// background.
///
/// # Errors
///
/// Returns an error if `images` is empty, `pixels` is zero, or `pixels`
/// exceeds the cropped width or height
pub fn circle_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let cropped = crop_uniform(images, rng)?;
    ensure_tile_fits(&cropped, (pixels, pixels))?;

    let mask = make_mask(ShapeKind::Disc, (pixels, pixels))?;
    let background = cropped
        .choose(rng)
        .and_then(dominant_color)
        .unwrap_or(Rgb([0, 0, 0]));

    let tiles = slice_grid(&cropped, (pixels, pixels))?;
    let side = floor_sqrt(tiles.len()) as u32;
    if side == 0 {
        return Err(degenerate("circstitch", &"no complete tile fits the crop"));
    }
    debug!(
        tiles = tiles.len(),
        grid = side,
        ?background,
        "placing circular dot grid"
    );

    let extent = side * pixels;
    let mut canvas = RgbImage::from_pixel(extent, extent, background);
    let mut pool = TilePool::new(tiles);

    for row in 0..side {
        for column in 0..side {
            let Some(tile) = pool.draw(rng) else {
                continue;
            };
            if let Some(tile_pixels) = tile.materialize(&cropped) {
                paste_masked(
                    &mut canvas,
                    &tile_pixels,
                    &mask,
                    i64::from(column * pixels),
                    i64::from(row * pixels),
                );
            }
        }
    }

    Ok(canvas)
}

/// Merge two dot grids, the second offset by half a tile in both axes
///
/// The second grid is shifted north then west by `pixels / 2` so its discs
/// sit between those of the first. One darker/lighter draw decides how the
/// two are combined.
///
/// # Errors
///
/// Returns an error if either dot grid cannot be built
pub fn circle_merge<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    let first = circle_stitch(images, pixels, rng)?;
    let second = circle_stitch(images, pixels, rng)?;

    let half = i64::from(pixels / 2);
    let second = toroidal_shift(&second, half, Direction::North);
    let second = toroidal_shift(&second, half, Direction::West);

    let mode = BlendMode::random(rng);
    debug!(?mode, "merging offset dot grids");
    Ok(blend(&first, &second, mode))
}
