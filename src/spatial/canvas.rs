//! Canvas allocation and paste operations with clipping

use crate::spatial::masks::ShapeMask;
use image::{ImageBuffer, Pixel, Rgb, RgbImage, imageops};

/// Allocate a canvas pre-filled with `background`
pub fn blank_canvas(width: u32, height: u32, background: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(background))
}

/// Copy `tile` onto `canvas` with its top-left corner at `(x, y)`
///
/// Offsets may be negative; pixels falling outside the canvas are dropped.
pub fn paste<P: Pixel>(
    canvas: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    tile: &ImageBuffer<P, Vec<P::Subpixel>>,
    x: i64,
    y: i64,
) {
    imageops::replace(canvas, tile, x, y);
}

/// Composite `tile` through `mask` onto `canvas` at `(x, y)`
///
/// Each channel becomes `round((tile * alpha + canvas * (255 - alpha)) / 255)`.
/// The mask is aligned with the tile; where the two differ in size only their
/// common region is used. Pixels outside the canvas are dropped.
pub fn paste_masked(canvas: &mut RgbImage, tile: &RgbImage, mask: &ShapeMask, x: i64, y: i64) {
    let alpha = mask.as_image();
    let width = tile.width().min(alpha.width());
    let height = tile.height().min(alpha.height());

    for ty in 0..height {
        let cy = y + i64::from(ty);
        let Ok(cy) = u32::try_from(cy) else {
            continue;
        };
        if cy >= canvas.height() {
            break;
        }
        for tx in 0..width {
            let cx = x + i64::from(tx);
            let Ok(cx) = u32::try_from(cx) else {
                continue;
            };
            if cx >= canvas.width() {
                break;
            }

            let a = u32::from(alpha.get_pixel(tx, ty).0[0]);
            if a == 0 {
                continue;
            }
            let source = *tile.get_pixel(tx, ty);
            let target = canvas.get_pixel_mut(cx, cy);
            for (dst, &src) in target.0.iter_mut().zip(source.0.iter()) {
                let mixed = (u32::from(src) * a + u32::from(*dst) * (255 - a) + 127) / 255;
                *dst = mixed as u8;
            }
        }
    }
}
