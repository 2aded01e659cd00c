//! Source discovery and decoding, collage export and GIF animation export

use crate::algorithm::animation::FrameSequence;
use crate::io::configuration::{IMAGE_EXTENSIONS, MAX_SOURCE_ATTEMPTS};
use crate::io::error::{CollageError, Result, WithPath, file_system, invalid_parameter};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Whether `path` carries one of the recognised image extensions
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// List the image files directly inside `directory`, sorted by path
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - No file with a recognised extension is found
pub fn collect_sources(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(directory).map_err(|e| file_system(directory, "read directory", e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system(directory, "read directory entry", e))?
            .path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(CollageError::NoSourceImages {
            directory: directory.to_path_buf(),
        });
    }
    Ok(files)
}

/// Decode the image at `path` and normalise it to three-channel colour
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).loading(path)?;
    Ok(image.to_rgb8())
}

/// Picks random source files that decode and meet minimum dimensions
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader {
    /// Smallest accepted height in pixels
    pub min_height: u32,
    /// Smallest accepted width in pixels
    pub min_width: u32,
}

impl SourceLoader {
    /// Create a loader enforcing the given minimum dimensions
    pub const fn new(min_height: u32, min_width: u32) -> Self {
        Self {
            min_height,
            min_width,
        }
    }

    /// Whether a decoded image meets the minimum dimensions
    pub fn accepts(&self, image: &RgbImage) -> bool {
        image.height() >= self.min_height && image.width() >= self.min_width
    }

    /// Load a uniformly random file from `files`, retrying past failures
    ///
    /// Undecodable or undersized files are logged and another file is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `files` is empty or no acceptable image is found
    /// within the retry budget
    pub fn load_random<R: Rng + ?Sized>(&self, files: &[PathBuf], rng: &mut R) -> Result<RgbImage> {
        for _ in 0..MAX_SOURCE_ATTEMPTS {
            let Some(path) = files.choose(rng) else {
                break;
            };
            match load_rgb(path) {
                Ok(image) if self.accepts(&image) => {
                    debug!(
                        path = %path.display(),
                        width = image.width(),
                        height = image.height(),
                        "loaded source"
                    );
                    return Ok(image);
                }
                Ok(image) => {
                    debug!(
                        path = %path.display(),
                        width = image.width(),
                        height = image.height(),
                        "source below minimum dimensions"
                    );
                }
                Err(error) => warn!(%error, "skipping unreadable source"),
            }
        }

        Err(CollageError::SourceExhausted {
            attempts: if files.is_empty() {
                0
            } else {
                MAX_SOURCE_ATTEMPTS
            },
        })
    }
}

/// Save a composite, creating parent directories as needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_collage(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image.save(path).exporting(path)
}

/// Write `sequence` as a GIF animation repeating `loops` times
///
/// # Errors
///
/// Returns an error if:
/// - The sequence holds no frames
/// - The parent directory or output file cannot be created
/// - GIF encoding fails
pub fn export_animation(
    sequence: FrameSequence,
    path: &Path,
    delay_ms: u32,
    loops: u16,
) -> Result<()> {
    if sequence.is_empty() {
        return Err(invalid_parameter(
            "sequence",
            &0,
            &"an animation needs at least one frame",
        ));
    }
    ensure_parent(path)?;

    let file = std::fs::File::create(path).map_err(|e| file_system(path, "create file", e))?;
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Finite(loops)).exporting(path)?;

    let frames = sequence.into_iter().map(|frame| {
        Frame::from_parts(
            DynamicImage::ImageRgb8(frame).to_rgba8(),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    });
    encoder.encode_frames(frames).exporting(path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| file_system(parent, "create directory", e))?;
    }
    Ok(())
}
