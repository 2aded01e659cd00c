//! Command-line interface for batch collage generation from a source directory

use crate::algorithm::animation::{Bands, sequence_frames};
use crate::algorithm::compositor::Compositor;
use crate::io::configuration::{
    ANIMATION_EXTENSION, ANIMATION_LOOPS, DEFAULT_COLLAGE_COUNT, DEFAULT_MAX_PIXELS,
    DEFAULT_MIN_HEIGHT, DEFAULT_MIN_PIXELS, DEFAULT_MIN_WIDTH, FRAME_DELAY_MS, OUTPUT_EXTENSION,
    OUTPUT_PREFIX, SOURCES_PER_COLLAGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{SourceLoader, collect_sources, export_animation, save_collage};
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tilecollage")]
#[command(author, version, about = "Collage some pictures")]
/// Command-line arguments for the collage generator
pub struct Cli {
    /// Directory of source images
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory collages are written to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of collages to create
    #[arg(short, long, default_value_t = DEFAULT_COLLAGE_COUNT)]
    pub number: usize,

    /// Compositors to choose from (defaults to all)
    #[arg(short, long, value_enum, num_args = 1..)]
    pub function: Vec<Compositor>,

    /// Minimum tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_MIN_PIXELS)]
    pub min: u32,

    /// Maximum tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
    pub max: u32,

    /// Minimum height of an accepted source image
    #[arg(long, alias = "minheight", default_value_t = DEFAULT_MIN_HEIGHT)]
    pub min_height: u32,

    /// Minimum width of an accepted source image
    #[arg(long, alias = "minwidth", default_value_t = DEFAULT_MIN_WIDTH)]
    pub min_width: u32,

    /// Random seed for reproducible batches (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Also write a looping GIF with this many frames per collage
    #[arg(short, long, value_name = "FRAMES")]
    pub animate: Option<usize>,

    /// Band orientation used for animations
    #[arg(long, value_enum, default_value_t = Bands::Vertical)]
    pub bands: Bands,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Compositors the batch draws from
    pub fn compositors(&self) -> Vec<Compositor> {
        if self.function.is_empty() {
            Compositor::ALL.to_vec()
        } else {
            self.function.clone()
        }
    }

    /// Check argument combinations clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size range is empty or starts at zero,
    /// or an animation is requested with zero frames
    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            return Err(invalid_parameter(
                "min",
                &self.min,
                &"tile edge length must be positive",
            ));
        }
        if self.min > self.max {
            return Err(invalid_parameter(
                "max",
                &self.max,
                &format!("must not be smaller than --min ({})", self.min),
            ));
        }
        if self.animate == Some(0) {
            return Err(invalid_parameter(
                "animate",
                &0,
                &"an animation needs at least one frame",
            ));
        }
        Ok(())
    }
}

/// Orchestrates a batch of collages from one source directory
pub struct CollageBatch {
    cli: Cli,
    rng: StdRng,
    progress: ProgressManager,
}

impl CollageBatch {
    /// Create a batch runner, seeding its generator from the CLI
    pub fn new(cli: Cli) -> Self {
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.number)
        } else {
            ProgressManager::hidden(cli.number)
        };

        Self { cli, rng, progress }
    }

    /// Generate every collage of the batch
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, source discovery, loading,
    /// composition or export fails
    pub fn run(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = collect_sources(&self.cli.input)?;
        info!(
            sources = files.len(),
            input = %self.cli.input.display(),
            "collected source images"
        );

        let compositors = self.cli.compositors();
        let loader = SourceLoader::new(self.cli.min_height, self.cli.min_width);

        for index in 0..self.cli.number {
            self.generate(index, &files, &compositors, loader)?;
        }

        info!(
            collages = self.progress.position(),
            output = %self.cli.output.display(),
            "batch complete"
        );
        self.progress.finish();
        Ok(())
    }

    fn generate(
        &mut self,
        index: usize,
        files: &[PathBuf],
        compositors: &[Compositor],
        loader: SourceLoader,
    ) -> Result<()> {
        let pixels = self.rng.random_range(self.cli.min..=self.cli.max);
        let sources = (0..SOURCES_PER_COLLAGE)
            .map(|_| loader.load_random(files, &mut self.rng))
            .collect::<Result<Vec<_>>>()?;

        let Some(&compositor) = compositors.choose(&mut self.rng) else {
            return Err(invalid_parameter(
                "function",
                &"",
                &"no compositor selected",
            ));
        };
        self.progress.start_collage(compositor.name());

        let collage = compositor.compose(&sources, pixels, &mut self.rng)?;
        let path = collage_path(&self.cli.output, index, OUTPUT_EXTENSION);
        info!(path = %path.display(), %compositor, pixels, "saving collage");
        save_collage(&collage, &path)?;

        if let Some(frames) = self.cli.animate {
            let sequence = sequence_frames(&collage, frames, pixels, self.cli.bands)?;
            let animation_path = collage_path(&self.cli.output, index, ANIMATION_EXTENSION);
            info!(path = %animation_path.display(), frames = sequence.len(), "saving animation");
            export_animation(sequence, &animation_path, FRAME_DELAY_MS, ANIMATION_LOOPS)?;
        }

        self.progress.complete_collage();
        Ok(())
    }
}

/// Output path `<directory>/collage_<index>.<extension>`
pub fn collage_path(directory: &Path, index: usize, extension: &str) -> PathBuf {
    directory.join(format!("{OUTPUT_PREFIX}{index}.{extension}"))
}
