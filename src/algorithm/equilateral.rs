//! Equilateral triangle tilings that interlock into hexagonal patterns
//!
//! Tiles are `pixels` wide along a lane and one triangle altitude across it.
//! Each lane holds `2 * side + 1` slots spaced half a tile apart, starting
//! half a tile before the canvas edge. Slot orientation alternates along the
//! lane and flips between neighbouring lanes so the triangles interlock. The
//! first slot's tile is drawn before the lane is walked and is drawn again in
//! the last slot, so the two clipped halves meet across the seam.

use crate::io::configuration::STRIP_BACKGROUND;
use crate::io::error::{Result, degenerate};
use crate::math::geometry::{equilateral_altitude, floor_sqrt};
use crate::spatial::canvas::{blank_canvas, paste_masked};
use crate::spatial::crop::crop_uniform;
use crate::spatial::masks::{ShapeKind, ShapeMask, make_mask};
use crate::spatial::tiles::{TilePool, ensure_tile_fits, slice_grid};
use image::RgbImage;
use rand::Rng;
use tracing::debug;

/// Direction the lanes of triangles run in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lattice {
    /// Horizontal lanes of up/down triangles stacked top to bottom
    Rows,
    /// Vertical lanes of left/right triangles placed left to right
    Columns,
}

impl Lattice {
    const fn name(self) -> &'static str {
        match self {
            Self::Rows => "equi",
            Self::Columns => "vequi",
        }
    }

    /// Tile `(width, height)` for an edge length and altitude
    const fn tile(self, edge: u32, altitude: u32) -> (u32, u32) {
        match self {
            Self::Rows => (edge, altitude),
            Self::Columns => (altitude, edge),
        }
    }

    const fn shape(self) -> ShapeKind {
        match self {
            Self::Rows => ShapeKind::EquilateralDown,
            Self::Columns => ShapeKind::EquilateralRight,
        }
    }

    /// Canvas position of a point `along` a lane and `across` lanes
    const fn position(self, along: i64, across: i64) -> (i64, i64) {
        match self {
            Self::Rows => (along, across),
            Self::Columns => (across, along),
        }
    }
}

/// Tile an equilateral lattice of horizontal rows
///
/// # Errors
///
/// See [`equilateral_stitch`]
pub fn equi_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    equilateral_stitch(images, pixels, Lattice::Rows, rng)
}

/// Tile an equilateral lattice of vertical columns
///
/// # Errors
///
/// See [`equilateral_stitch`]
pub fn vequi_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    equilateral_stitch(images, pixels, Lattice::Columns, rng)
}

/// Tile triangles of edge `pixels` along lanes of the given `lattice`
///
/// The grid side is `floor(sqrt(floor(tiles / 2))) - 1` so that every lane
/// can draw its tiles without replacement.
///
/// # Errors
///
/// Returns an error if:
/// - `images` is empty or `pixels` is zero
/// - The derived tile does not fit inside the cropped sources
/// - The derived altitude or grid side is zero
pub fn equilateral_stitch<R: Rng + ?Sized>(
    images: &[RgbImage],
    pixels: u32,
    lattice: Lattice,
    rng: &mut R,
) -> Result<RgbImage> {
    let cropped = crop_uniform(images, rng)?;

    let altitude = equilateral_altitude(pixels);
    if altitude == 0 {
        return Err(degenerate(
            lattice.name(),
            &format!("triangle altitude for edge {pixels} rounds to zero"),
        ));
    }
    let tile = lattice.tile(pixels, altitude);
    ensure_tile_fits(&cropped, tile)?;

    let tiles = slice_grid(&cropped, tile)?;
    let side = floor_sqrt(tiles.len() / 2).saturating_sub(1) as u32;
    if side == 0 {
        return Err(degenerate(
            lattice.name(),
            &format!("{} tile(s) are too few for a lattice", tiles.len()),
        ));
    }
    debug!(
        compositor = lattice.name(),
        tiles = tiles.len(),
        grid = side,
        altitude,
        "placing equilateral lattice"
    );

    let (canvas_width, canvas_height) = lattice.tile(side * pixels, side * altitude);
    let mut canvas = blank_canvas(canvas_width, canvas_height, STRIP_BACKGROUND);

    let mask = make_mask(lattice.shape(), tile)?;
    let flipped = mask.rotated_180();
    let mut pool = TilePool::new(tiles);

    for lane in 0..side {
        let across = i64::from(lane * altitude);
        let edge = pool.draw(rng).and_then(|t| t.materialize(&cropped));
        let mut placement = LanePlacement {
            canvas: &mut canvas,
            lattice,
            lane,
            across,
            pixels,
            masks: [&mask, &flipped],
        };

        let last_slot = 2 * side;
        if let Some(edge) = &edge {
            placement.place(edge, 0);
        }
        for slot in 1..last_slot {
            if let Some(tile_pixels) = pool.draw(rng).and_then(|t| t.materialize(&cropped)) {
                placement.place(&tile_pixels, slot);
            }
        }
        if let Some(edge) = &edge {
            placement.place(edge, last_slot);
        }
    }

    Ok(canvas)
}

/// Placement state for a single lane of the lattice
struct LanePlacement<'a> {
    canvas: &'a mut RgbImage,
    lattice: Lattice,
    lane: u32,
    across: i64,
    pixels: u32,
    masks: [&'a ShapeMask; 2],
}

impl LanePlacement<'_> {
    fn place(&mut self, tile_pixels: &RgbImage, slot: u32) {
        // Slot k starts at floor(k * pixels / 2) - floor(pixels / 2)
        let along = i64::from(slot) * i64::from(self.pixels) / 2 - i64::from(self.pixels / 2);
        let [upright, flipped] = self.masks;
        let mask = if (slot + self.lane) % 2 == 0 {
            upright
        } else {
            flipped
        };
        let (x, y) = self.lattice.position(along, self.across);
        paste_masked(self.canvas, tile_pixels, mask, x, y);
    }
}
