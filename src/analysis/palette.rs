//! Colour frequency analysis of source images

use image::{Rgb, RgbImage};
use std::collections::HashMap;

/// Most frequent pixel colour in `image`
///
/// Ties between equally frequent colours resolve to the larger colour in
/// lexicographic channel order. Returns `None` for an empty image.
pub fn dominant_color(image: &RgbImage) -> Option<Rgb<u8>> {
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in image.pixels() {
        *counts.entry(pixel.0).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(color, count)| (count, color))
        .map(|(color, _)| Rgb(color))
}
