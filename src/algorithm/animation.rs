//! Looping animation frames derived from a composite by braided band shifts
//!
//! The composite is cut into bands of width `band`. Each frame shifts every
//! band toroidally by the same offset, alternating direction from band to
//! band. Offsets step by `extent / frames`, so the sequence loops smoothly.

use crate::io::error::{Result, degenerate, invalid_parameter};
use crate::spatial::canvas::paste;
use crate::spatial::shift::{Direction, toroidal_shift};
use image::{RgbImage, imageops};

/// How a composite is cut into bands before shifting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Bands {
    /// Columns of width `band`, shifted alternately south and north
    #[default]
    Vertical,
    /// Rows of height `band`, shifted alternately west and east
    Horizontal,
}

impl Bands {
    /// Shift directions of even and odd bands
    const fn directions(self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::South, Direction::North],
            Self::Horizontal => [Direction::West, Direction::East],
        }
    }
}

/// Ordered animation frames, starting with the unshifted composite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<RgbImage>,
}

impl FrameSequence {
    /// Number of frames
    pub const fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames
    pub const fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Borrow the frames in display order
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }
}

impl IntoIterator for FrameSequence {
    type Item = RgbImage;
    type IntoIter = std::vec::IntoIter<RgbImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

/// Derive `frames` frames from `canvas` by shifting bands of width `band`
///
/// The shift axis runs along the bands: vertical bands move by multiples of
/// `height / frames`, horizontal bands by multiples of `width / frames`. The
/// first frame is the canvas itself, followed by `frames - 1` frames shifted
/// by `1..frames` steps. Looping back to the first frame completes the cycle.
///
/// # Errors
///
/// Returns an error if:
/// - `frames` or `band` is zero
/// - The canvas extent along the shift axis is smaller than `frames`
pub fn sequence_frames(
    canvas: &RgbImage,
    frames: usize,
    band: u32,
    bands: Bands,
) -> Result<FrameSequence> {
    if frames == 0 {
        return Err(invalid_parameter(
            "frames",
            &frames,
            &"at least one frame is required",
        ));
    }
    if band == 0 {
        return Err(invalid_parameter(
            "band",
            &band,
            &"band thickness must be positive",
        ));
    }

    let (width, height) = canvas.dimensions();
    let extent = match bands {
        Bands::Vertical => height,
        Bands::Horizontal => width,
    };
    let step = u64::from(extent) / frames as u64;
    if step == 0 {
        return Err(degenerate(
            "animation",
            &format!("extent {extent} is too small for {frames} frames"),
        ));
    }

    let mut sequence = Vec::with_capacity(frames);
    sequence.push(canvas.clone());
    for index in 1..frames as u64 {
        let offset = (index * step) as i64;
        sequence.push(braid(canvas, offset, band, bands));
    }

    Ok(FrameSequence { frames: sequence })
}

/// One frame: every band shifted by `offset`, directions alternating
fn braid(canvas: &RgbImage, offset: i64, band: u32, bands: Bands) -> RgbImage {
    let (width, height) = canvas.dimensions();
    let mut frame = RgbImage::new(width, height);
    let [even, odd] = bands.directions();

    let limit = match bands {
        Bands::Vertical => width,
        Bands::Horizontal => height,
    };
    let mut start = 0u32;
    let mut parity = 0u32;
    while start < limit {
        let thickness = band.min(limit - start);
        let direction = if parity % 2 == 0 { even } else { odd };
        match bands {
            Bands::Vertical => {
                let strip = imageops::crop_imm(canvas, start, 0, thickness, height).to_image();
                let shifted = toroidal_shift(&strip, offset, direction);
                paste(&mut frame, &shifted, i64::from(start), 0);
            }
            Bands::Horizontal => {
                let strip = imageops::crop_imm(canvas, 0, start, width, thickness).to_image();
                let shifted = toroidal_shift(&strip, offset, direction);
                paste(&mut frame, &shifted, 0, i64::from(start));
            }
        }
        start += thickness;
        parity += 1;
    }

    frame
}
