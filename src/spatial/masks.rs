//! Anti-aliased alpha masks for pasting tiles through non-rectangular shapes
//!
//! Shapes are rasterised at [`MASK_SUPERSAMPLE`] times the target resolution
//! by sampling pixel centres, then box-averaged down to the tile size. Every
//! mask in the crate goes through this path so diagonal and curved edges get
//! the same treatment.

use crate::io::configuration::MASK_SUPERSAMPLE;
use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::{ellipse_contains, triangle_contains};
use image::{GrayImage, Luma, imageops};
use ndarray::Array2;

/// Which diagonal splits a square tile into two right triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// Triangle below the top-left to bottom-right diagonal
    Lower,
    /// Triangle above the bottom-left to top-right diagonal
    Upper,
}

/// Silhouettes a mask can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Ellipse inscribed in the tile (a circle for square tiles)
    Disc,
    /// Right triangle filling half of the tile, anchored at the left edge
    RightTriangle(Diagonal),
    /// Triangle with its base on the top edge and apex at the bottom centre
    EquilateralDown,
    /// Triangle with its base on the left edge and apex at the right middle
    EquilateralRight,
}

impl ShapeKind {
    /// Vertices in supersampled coordinates for `width x height` at `scale`
    fn polygon(self, width: u32, height: u32, scale: u32) -> Option<[[f64; 2]; 3]> {
        let w = f64::from(width * scale);
        let h = f64::from(height * scale);
        match self {
            Self::Disc => None,
            Self::RightTriangle(Diagonal::Lower) => Some([[0.0, 0.0], [0.0, h], [w, h]]),
            Self::RightTriangle(Diagonal::Upper) => Some([[0.0, h], [w, 0.0], [0.0, 0.0]]),
            Self::EquilateralDown => {
                let apex = f64::from(width.div_ceil(2) * scale);
                Some([[0.0, 0.0], [w, 0.0], [apex, h]])
            }
            Self::EquilateralRight => {
                let apex = f64::from(height.div_ceil(2) * scale);
                Some([[0.0, 0.0], [w, apex], [0.0, h]])
            }
        }
    }
}

/// Single-channel alpha raster matching a tile's pixel dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMask {
    alpha: GrayImage,
}

impl ShapeMask {
    /// Wrap an existing alpha raster
    pub const fn from_image(alpha: GrayImage) -> Self {
        Self { alpha }
    }

    /// Underlying alpha raster
    pub const fn as_image(&self) -> &GrayImage {
        &self.alpha
    }

    /// Mask dimensions `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.alpha.dimensions()
    }

    /// Rotate the mask by 180 degrees in place
    pub fn rotate_180(&mut self) {
        imageops::rotate180_in_place(&mut self.alpha);
    }

    /// Copy of the mask rotated by 180 degrees
    #[must_use]
    pub fn rotated_180(&self) -> Self {
        Self {
            alpha: imageops::rotate180(&self.alpha),
        }
    }

    /// Fraction of the mask that is opaque, weighting partial coverage
    pub fn coverage(&self) -> f64 {
        let (width, height) = self.dimensions();
        let area = f64::from(width) * f64::from(height);
        if area == 0.0 {
            return 0.0;
        }
        let total: f64 = self.alpha.pixels().map(|p| f64::from(p.0[0])).sum();
        total / (255.0 * area)
    }
}

/// Build an anti-aliased mask of `shape` at `size = (width, height)`
///
/// # Errors
///
/// Returns an error if either dimension is zero
pub fn make_mask(shape: ShapeKind, size: (u32, u32)) -> Result<ShapeMask> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "size",
            &format!("{width}x{height}"),
            &"mask dimensions must be positive",
        ));
    }

    let scale = MASK_SUPERSAMPLE;
    let coverage = rasterize(shape, width, height, scale);

    // Box filter: each output pixel averages one scale x scale block
    let block = f64::from(scale * scale);
    let mut alpha = GrayImage::new(width, height);
    for (block_index, window) in coverage
        .exact_chunks((scale as usize, scale as usize))
        .into_iter()
        .enumerate()
    {
        let filled = window.iter().filter(|&&inside| inside).count();
        let value = (filled as f64 * 255.0 / block).round() as u8;
        let x = (block_index % width as usize) as u32;
        let y = (block_index / width as usize) as u32;
        alpha.put_pixel(x, y, Luma([value]));
    }

    Ok(ShapeMask { alpha })
}

/// Boolean coverage grid `(rows, cols)` at `scale` times the target size
fn rasterize(shape: ShapeKind, width: u32, height: u32, scale: u32) -> Array2<bool> {
    let rows = (height * scale) as usize;
    let cols = (width * scale) as usize;
    let polygon = shape.polygon(width, height, scale);
    let (w, h) = (cols as f64, rows as f64);

    Array2::from_shape_fn((rows, cols), |(row, col)| {
        let centre = [col as f64 + 0.5, row as f64 + 0.5];
        polygon.as_ref().map_or_else(
            || ellipse_contains(w, h, centre),
            |triangle| triangle_contains(triangle, centre),
        )
    })
}
