//! Toroidal (wrap-around) translation of raster buffers

use crate::spatial::canvas::paste;
use image::{ImageBuffer, Pixel};

/// Direction content moves in during a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero
    North,
    /// Towards the last row
    South,
    /// Towards the last column
    East,
    /// Towards column zero
    West,
}

impl Direction {
    /// Direction moving the opposite way along the same axis
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Translate `image` by `offset` pixels towards `direction`, wrapping at the edges
///
/// Content leaving one edge re-enters at the opposite edge. Negative offsets
/// move the other way; offsets beyond the extent wrap modulo the extent. The
/// result is built from two pastes into a blank buffer, so no resampling occurs.
pub fn toroidal_shift<P: Pixel>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    offset: i64,
    direction: Direction,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (width, height) = image.dimensions();
    let mut shifted = ImageBuffer::new(width, height);
    if width == 0 || height == 0 {
        return shifted;
    }

    let (extent, signed) = match direction {
        Direction::North => (height, -offset),
        Direction::South => (height, offset),
        Direction::East => (width, offset),
        Direction::West => (width, -offset),
    };
    let extent = i64::from(extent);
    let delta = signed.rem_euclid(extent);

    match direction {
        Direction::North | Direction::South => {
            paste(&mut shifted, image, 0, delta);
            paste(&mut shifted, image, 0, delta - extent);
        }
        Direction::East | Direction::West => {
            paste(&mut shifted, image, delta, 0);
            paste(&mut shifted, image, delta - extent, 0);
        }
    }

    shifted
}
