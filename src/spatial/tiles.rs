//! Grid slicing of source images into lightweight tile references
//!
//! Tiles record where pixels live rather than copying them. Pixel data is
//! only materialised when a compositor places a tile. The [`TilePool`] gives
//! compositors sampling without replacement over a sliced set.

use crate::io::error::{Result, invalid_parameter};
use image::{RgbImage, imageops};
use rand::Rng;

/// Axis-aligned rectangle in source pixel coordinates (right/lower exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column (inclusive)
    pub left: u32,
    /// Topmost row (inclusive)
    pub upper: u32,
    /// Rightmost column (exclusive)
    pub right: u32,
    /// Bottom row (exclusive)
    pub lower: u32,
}

impl Rect {
    /// Horizontal extent
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Vertical extent
    pub const fn height(&self) -> u32 {
        self.lower - self.upper
    }

    /// Whether the two rectangles share any pixel
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.upper < other.lower
            && other.upper < self.lower
    }
}

/// Reference to a rectangular region of one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Index of the source image the tile was cut from
    pub source: usize,
    /// Region of that source covered by the tile
    pub rect: Rect,
}

impl Tile {
    /// Copy the tile's pixels out of its source image
    ///
    /// Returns `None` if the tile refers to an image that is not in `images`.
    pub fn materialize(&self, images: &[RgbImage]) -> Option<RgbImage> {
        images.get(self.source).map(|image| {
            imageops::crop_imm(
                image,
                self.rect.left,
                self.rect.upper,
                self.rect.width(),
                self.rect.height(),
            )
            .to_image()
        })
    }
}

/// Ordered tiles produced by slicing: image order, then row-major scan order
pub type TileSet = Vec<Tile>;

/// Partition every image into non-overlapping `tile` sized rectangles
///
/// Scans left to right, then top to bottom. Remainder strips narrower than a
/// tile are dropped, so an image of `W x H` yields `floor(W/tw) * floor(H/th)`
/// tiles.
///
/// # Errors
///
/// Returns an error if either tile dimension is zero
pub fn slice_grid(images: &[RgbImage], tile: (u32, u32)) -> Result<TileSet> {
    let (tile_width, tile_height) = tile;
    if tile_width == 0 || tile_height == 0 {
        return Err(invalid_parameter(
            "tile",
            &format!("{tile_width}x{tile_height}"),
            &"tile dimensions must be positive",
        ));
    }

    let mut tiles = Vec::new();
    for (source, image) in images.iter().enumerate() {
        let columns = image.width() / tile_width;
        let rows = image.height() / tile_height;
        tiles.reserve((columns * rows) as usize);

        for row in 0..rows {
            for column in 0..columns {
                let left = column * tile_width;
                let upper = row * tile_height;
                tiles.push(Tile {
                    source,
                    rect: Rect {
                        left,
                        upper,
                        right: left + tile_width,
                        lower: upper + tile_height,
                    },
                });
            }
        }
    }

    Ok(tiles)
}

/// Check that a `tile` sized rectangle fits inside every image
///
/// # Errors
///
/// Returns an error if either tile dimension is zero or exceeds the
/// corresponding dimension of any image
pub fn ensure_tile_fits(images: &[RgbImage], tile: (u32, u32)) -> Result<()> {
    let (tile_width, tile_height) = tile;
    if tile_width == 0 || tile_height == 0 {
        return Err(invalid_parameter(
            "tile",
            &format!("{tile_width}x{tile_height}"),
            &"tile dimensions must be positive",
        ));
    }
    if let Some(image) = images
        .iter()
        .find(|image| image.width() < tile_width || image.height() < tile_height)
    {
        return Err(invalid_parameter(
            "tile",
            &format!("{tile_width}x{tile_height}"),
            &format!(
                "tile does not fit inside a {}x{} source",
                image.width(),
                image.height()
            ),
        ));
    }
    Ok(())
}

/// Working set for drawing tiles without replacement
///
/// Each pool owns its own copy of the tiles, so two pools built from the same
/// [`TileSet`] are fully independent.
#[derive(Debug, Clone)]
pub struct TilePool {
    remaining: Vec<Tile>,
}

impl TilePool {
    /// Create a pool holding every tile of the set
    pub const fn new(tiles: TileSet) -> Self {
        Self { remaining: tiles }
    }

    /// Tiles not yet drawn
    pub const fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether every tile has been drawn
    pub const fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remove and return a uniformly random tile, or `None` once exhausted
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Tile> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }

    /// Draw up to `count` tiles, returned in draw order
    pub fn sample<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Tile> {
        let count = count.min(self.remaining.len());
        (0..count).filter_map(|_| self.draw(rng)).collect()
    }
}
