//! Pixel-wise darker/lighter combination of two composites

use image::{Rgb, RgbImage};
use rand::Rng;

/// Per-channel operator used to merge two composites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Keep the per-channel minimum
    Darker,
    /// Keep the per-channel maximum
    Lighter,
}

impl BlendMode {
    /// One fair binary draw between the two operators
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Lighter
        } else {
            Self::Darker
        }
    }

    const fn apply(self, a: u8, b: u8) -> u8 {
        match self {
            Self::Darker => {
                if a < b {
                    a
                } else {
                    b
                }
            }
            Self::Lighter => {
                if a > b {
                    a
                } else {
                    b
                }
            }
        }
    }
}

/// Combine `a` and `b` channel by channel using `mode`
///
/// Partners of different sizes are reconciled by blending only their common
/// top-left region, so the result is `min(widths) x min(heights)`.
pub fn blend(a: &RgbImage, b: &RgbImage, mode: BlendMode) -> RgbImage {
    let width = a.width().min(b.width());
    let height = a.height().min(b.height());

    RgbImage::from_fn(width, height, |x, y| {
        let pa = a.get_pixel(x, y).0;
        let pb = b.get_pixel(x, y).0;
        let mut out = [0u8; 3];
        for ((channel, &ca), &cb) in out.iter_mut().zip(pa.iter()).zip(pb.iter()) {
            *channel = mode.apply(ca, cb);
        }
        Rgb(out)
    })
}
