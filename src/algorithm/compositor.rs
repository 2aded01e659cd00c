//! Closed set of tessellation compositors behind one dispatch point

use crate::algorithm::circle::{circle_merge, circle_stitch};
use crate::algorithm::equilateral::{equi_stitch, vequi_stitch};
use crate::algorithm::impose::{grid_impose, himpose, vimpose};
use crate::algorithm::stitch::{grid_stitch, hstitch, vstitch};
use crate::algorithm::triangle::tri_stitch;
use crate::io::error::{CollageError, Result, invalid_parameter};
use image::RgbImage;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Every tessellation strategy the crate can compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Compositor {
    /// Full-width strips stacked vertically
    #[value(name = "hstitch")]
    HStitch,
    /// Full-height strips placed horizontally
    #[value(name = "vstitch")]
    VStitch,
    /// Two strip stitches stitched across each other
    #[value(name = "gridstitch", alias = "gridsstitch")]
    GridStitch,
    /// Disc-masked tiles on the dominant colour
    #[value(name = "circstitch")]
    CircStitch,
    /// Two dot grids offset by half a tile and blended
    #[value(name = "circmerge")]
    CircMerge,
    /// Cells split into two right-triangle fragments
    #[value(name = "tristitch")]
    TriStitch,
    /// Interlocking equilateral triangles in rows
    #[value(name = "equi")]
    Equi,
    /// Interlocking equilateral triangles in columns
    #[value(name = "vequi")]
    VEqui,
    /// Two grid stitches blended
    #[value(name = "gridimpose")]
    GridImpose,
    /// Horizontal strip stitch blended with a random strip stitch
    #[value(name = "himpose")]
    HImpose,
    /// Vertical strip stitch blended with a random strip stitch
    #[value(name = "vimpose")]
    VImpose,
}

impl Compositor {
    /// All compositors in a stable order
    pub const ALL: [Self; 11] = [
        Self::HStitch,
        Self::VStitch,
        Self::GridStitch,
        Self::CircStitch,
        Self::CircMerge,
        Self::TriStitch,
        Self::Equi,
        Self::VEqui,
        Self::GridImpose,
        Self::HImpose,
        Self::VImpose,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::HStitch => "hstitch",
            Self::VStitch => "vstitch",
            Self::GridStitch => "gridstitch",
            Self::CircStitch => "circstitch",
            Self::CircMerge => "circmerge",
            Self::TriStitch => "tristitch",
            Self::Equi => "equi",
            Self::VEqui => "vequi",
            Self::GridImpose => "gridimpose",
            Self::HImpose => "himpose",
            Self::VImpose => "vimpose",
        }
    }

    /// Arrange tiles of edge `pixels` cut from `images` into one composite
    ///
    /// # Errors
    ///
    /// Returns an error if `images` is empty, `pixels` is zero, the tile does
    /// not fit the cropped sources, or the derived geometry is degenerate
    #[tracing::instrument(skip(images, rng), fields(compositor = self.name(), sources = images.len()))]
    pub fn compose<R: Rng + ?Sized>(
        self,
        images: &[RgbImage],
        pixels: u32,
        rng: &mut R,
    ) -> Result<RgbImage> {
        if images.is_empty() {
            return Err(invalid_parameter(
                "images",
                &0,
                &"at least one source image is required",
            ));
        }
        if pixels == 0 {
            return Err(invalid_parameter(
                "pixels",
                &pixels,
                &"tile edge length must be positive",
            ));
        }

        match self {
            Self::HStitch => hstitch(images, pixels, rng),
            Self::VStitch => vstitch(images, pixels, rng),
            Self::GridStitch => grid_stitch(images, pixels, rng),
            Self::CircStitch => circle_stitch(images, pixels, rng),
            Self::CircMerge => circle_merge(images, pixels, rng),
            Self::TriStitch => tri_stitch(images, pixels, rng),
            Self::Equi => equi_stitch(images, pixels, rng),
            Self::VEqui => vequi_stitch(images, pixels, rng),
            Self::GridImpose => grid_impose(images, pixels, rng),
            Self::HImpose => himpose(images, pixels, rng),
            Self::VImpose => vimpose(images, pixels, rng),
        }
    }
}

impl fmt::Display for Compositor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compositor {
    type Err = CollageError;

    fn from_str(name: &str) -> Result<Self> {
        if name == "gridsstitch" {
            return Ok(Self::GridStitch);
        }
        Self::ALL
            .into_iter()
            .find(|compositor| compositor.name() == name)
            .ok_or_else(|| invalid_parameter("compositor", &name, &"unknown compositor name"))
    }
}
