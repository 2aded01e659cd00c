//! Reduction of a source set to one common crop size

use crate::io::error::{Result, invalid_parameter};
use image::{RgbImage, imageops};
use rand::Rng;

/// Crop every image to the smallest width and height in the set
///
/// Each image gets its own uniformly random crop offset. Nothing is scaled,
/// so native pixel density is preserved. Images already at the target size
/// are returned unchanged. Output order matches input order.
///
/// # Errors
///
/// Returns an error if `images` is empty
pub fn crop_uniform<R: Rng + ?Sized>(images: &[RgbImage], rng: &mut R) -> Result<Vec<RgbImage>> {
    let (Some(width), Some(height)) = (
        images.iter().map(RgbImage::width).min(),
        images.iter().map(RgbImage::height).min(),
    ) else {
        return Err(invalid_parameter(
            "images",
            &0,
            &"at least one source image is required",
        ));
    };

    Ok(images
        .iter()
        .map(|image| {
            let left = rng.random_range(0..=image.width() - width);
            let upper = rng.random_range(0..=image.height() - height);
            imageops::crop_imm(image, left, upper, width, height).to_image()
        })
        .collect())
}
