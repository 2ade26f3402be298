//! Per-output progress tracking across generation cycles

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::spatial::canvas::CanvasSpec;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while canvases are rendered
///
/// Shows one bar per output for a handful of outputs and a single aggregate
/// bar once there are more than [`MAX_INDIVIDUAL_PROGRESS_BARS`].
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    output_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static OUTPUT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>16} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Canvases: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            output_bars: Vec::new(),
        }
    }

    /// Create bars for `outputs`, each expecting `cycles` canvases
    pub fn initialize(&mut self, outputs: &[CanvasSpec], cycles: usize) {
        if outputs.len() > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new((outputs.len() * cycles) as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for output in outputs {
            let bar = ProgressBar::new(cycles as u64);
            bar.set_style(OUTPUT_STYLE.clone());
            bar.set_prefix(output.name.clone());
            self.output_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Record one finished canvas for output `index`
    pub fn complete_canvas(&self, index: usize, message: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.output_bars.get(index) {
            bar.inc(1);
            bar.set_message(message.to_string());
        }
    }

    /// Number of bars currently shown
    pub fn bar_count(&self) -> usize {
        self.output_bars.len() + usize::from(self.batch_bar.is_some())
    }

    /// Position of the bar for output `index`, or of the aggregate bar
    pub fn position(&self, index: usize) -> u64 {
        self.batch_bar
            .as_ref()
            .or_else(|| self.output_bars.get(index))
            .map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All canvases rendered");
        }
        for bar in &self.output_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
