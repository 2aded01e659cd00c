//! Batch progress display for collage generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg:>12} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many collages of a batch have been written
///
/// A hidden manager accepts the same calls but draws nothing, so callers do
/// not need to branch on quiet mode.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a visible progress bar for `total` collages
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that never draws
    pub fn hidden(total: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total as u64);
        Self { bar }
    }

    /// Show which compositor is working on the current collage
    pub fn start_collage(&self, compositor: &str) {
        self.bar.set_message(compositor.to_string());
    }

    /// Record one finished collage
    pub fn complete_collage(&self) {
        self.bar.inc(1);
    }

    /// Collages completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
