//! Command-line interface for loading images, generating and applying wallpapers

use crate::algorithm::allocation::{AllocationConfig, select_for_monitors_with_remaining};
use crate::algorithm::remaining::RemainingCatalog;
use crate::io::catalog::{CatalogProvider, DirectoryCatalog, load_image};
use crate::io::configuration::{
    DEFAULT_BORDER_PX, DEFAULT_CYCLES, DEFAULT_IMAGES_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_POOL_RATIO,
    FILL_THRESHOLD,
};
use crate::io::error::{Result, WallError};
use crate::io::outputs::{
    OutputEnumerator, StaticOutputs, SystemOutputs, output_dir, parse_output_spec,
};
use crate::io::progress::ProgressManager;
use crate::io::raster::render_canvas;
use crate::io::wallpaper::{
    ApplyReport, CommandApplier, PickStrategy, SystemApplier, WallpaperApplier, apply_wallpapers,
};
use crate::spatial::canvas::CanvasSpec;
use crate::spatial::layout::compose_layout;
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(name = "mosaicwall")]
#[command(
    author,
    version,
    about = "Generate multi-monitor wallpaper collages from an image catalog"
)]
/// Command-line arguments for the wallpaper generator
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the image catalog
    #[arg(long, global = true, default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Directory receiving rendered wallpapers, one subdirectory per output
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Output canvas as NAME=WIDTHxHEIGHT (repeatable, disables detection)
    #[arg(
        short = 'o',
        long = "output",
        global = true,
        value_name = "NAME=WxH",
        value_parser = parse_output_arg
    )]
    pub outputs: Vec<CanvasSpec>,

    /// Gap between images in pixels
    #[arg(short, long, global = true, default_value_t = DEFAULT_BORDER_PX)]
    pub border: u32,

    /// Fraction of the remaining catalog drawn into each selection pool
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_POOL_RATIO,
        value_parser = parse_pool_ratio
    )]
    pub pool_ratio: f64,

    /// Random seed for reproducible selection (OS entropy when omitted)
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Background colour as R,G,B
    #[arg(long, global = true, default_value = "0,0,0", value_parser = parse_color)]
    pub background: [u8; 3],

    /// Command used to set a wallpaper; {path}, {output} and {index} are substituted
    #[arg(long, global = true, value_name = "TEMPLATE")]
    pub apply_command: Option<String>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Subcommands of the wallpaper generator
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Copy an image into the catalog directory
    Load {
        /// Path to the image file to load
        path: PathBuf,
    },
    /// Generate wallpapers for all outputs
    Generate {
        /// Number of wallpapers to generate per output
        #[arg(default_value_t = DEFAULT_CYCLES, value_parser = parse_count)]
        count: usize,
    },
    /// Set a rendered wallpaper on every output
    Apply {
        /// Pick a random wallpaper instead of the most recent one
        #[arg(short, long)]
        random: bool,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Allocation tunables derived from the arguments
    pub const fn allocation_config(&self) -> AllocationConfig {
        AllocationConfig {
            pool_ratio: self.pool_ratio,
            fill_threshold: FILL_THRESHOLD,
        }
    }
}

fn parse_output_arg(text: &str) -> std::result::Result<CanvasSpec, String> {
    parse_output_spec(text).map_err(|e| e.to_string())
}

fn parse_pool_ratio(text: &str) -> std::result::Result<f64, String> {
    let ratio: f64 = text.parse().map_err(|e| format!("{e}"))?;
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(ratio)
    } else {
        Err("pool ratio must be in (0, 1]".to_string())
    }
}

fn parse_count(text: &str) -> std::result::Result<usize, String> {
    let count: usize = text.parse().map_err(|e| format!("{e}"))?;
    if count == 0 {
        Err("count must be at least 1".to_string())
    } else {
        Ok(count)
    }
}

/// Parse an `R,G,B` colour
///
/// # Errors
///
/// Returns a message if there are not exactly three components in `0..=255`
pub fn parse_color(text: &str) -> std::result::Result<[u8; 3], String> {
    let components = text
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|e| format!("invalid colour component: {e}"))?;

    <[u8; 3]>::try_from(components)
        .map_err(|parts| format!("expected R,G,B, got {} components", parts.len()))
}

/// What happened to one canvas in one generation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasStatus {
    /// Canvas rendered with this many images
    Rendered {
        /// Number of images placed
        images: usize,
        /// Written file
        path: PathBuf,
    },
    /// No image fit; nothing was written
    Skipped,
}

/// Per-canvas outcome of [`Runner::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasReport {
    /// 1-based generation cycle
    pub cycle: usize,
    /// The canvas
    pub canvas: CanvasSpec,
    /// What happened
    pub status: CanvasStatus,
}

impl fmt::Display for CanvasReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            CanvasStatus::Rendered { images, path } => write!(
                f,
                "{}: {images} images -> {}",
                self.canvas,
                path.display()
            ),
            CanvasStatus::Skipped => {
                write!(f, "{}: No images selected, skipping.", self.canvas.name)
            }
        }
    }
}

/// Runs the parsed command against the catalog, outputs and renderer
pub struct Runner {
    cli: Cli,
    rng: StdRng,
}

impl Runner {
    /// Create a runner, seeding its random source from `--seed` if given
    pub fn new(cli: Cli) -> Self {
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { cli, rng }
    }

    /// Run the selected subcommand and print its outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty, no outputs are found, or a
    /// file operation fails
    pub fn run(&mut self) -> Result<()> {
        match self.cli.command.clone() {
            Command::Load { path } => {
                let image = load_image(&path, &self.cli.images_dir)?;
                print_lines(&[
                    format!("Loaded: {}", path.display()),
                    format!("  Dimensions: {}x{}", image.width(), image.height()),
                ]);
            }
            Command::Generate { count } => {
                let reports = self.generate(count)?;
                let lines: Vec<String> = reports
                    .iter()
                    .map(|report| {
                        if count > 1 {
                            format!("  Cycle {}/{count}: {report}", report.cycle)
                        } else {
                            format!("  {report}")
                        }
                    })
                    .collect();
                print_lines(&lines);
            }
            Command::Apply { random } => {
                let strategy = if random {
                    PickStrategy::Random
                } else {
                    PickStrategy::Latest
                };
                let reports = self.apply(strategy)?;
                let lines: Vec<String> = reports.iter().map(|r| format!("  {r}")).collect();
                print_lines(&lines);
            }
        }
        Ok(())
    }

    /// Canvases from `--output` flags, or detected from the system
    ///
    /// # Errors
    ///
    /// Returns [`WallError::NoOutputs`] if no output is configured or detected
    pub fn outputs(&self) -> Result<Vec<CanvasSpec>> {
        let listed = if self.cli.outputs.is_empty() {
            SystemOutputs.list_outputs().unwrap_or_else(|error| {
                warn!("{error}");
                Vec::new()
            })
        } else {
            StaticOutputs::new(self.cli.outputs.clone()).list_outputs()?
        };

        if listed.is_empty() {
            return Err(WallError::NoOutputs);
        }

        Ok(listed
            .into_iter()
            .map(|canvas| canvas.with_border(self.cli.border))
            .collect())
    }

    /// Run `cycles` generation cycles over every output
    ///
    /// One remaining catalog is threaded through all cycles, so images repeat
    /// only after the whole catalog has been used.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty, no outputs are found, or a
    /// canvas cannot be rendered
    pub fn generate(&mut self, cycles: usize) -> Result<Vec<CanvasReport>> {
        let provider = DirectoryCatalog::new(&self.cli.images_dir);
        let catalog = provider.list_catalog()?;
        if catalog.is_empty() {
            return Err(WallError::EmptyCatalog {
                dir: provider.dir().to_path_buf(),
            });
        }

        let outputs = self.outputs()?;
        info!(
            images = catalog.len(),
            outputs = outputs.len(),
            cycles,
            "generating wallpapers"
        );
        print_lines(&[generation_summary(catalog.len(), outputs.len(), cycles)]);

        let mut progress = self.cli.should_show_progress().then(ProgressManager::new);
        if let Some(ref mut pm) = progress {
            pm.initialize(&outputs, cycles);
        }

        let config = self.cli.allocation_config();
        let mut remaining = RemainingCatalog::new(catalog);
        let mut reports = Vec::with_capacity(cycles * outputs.len());

        for cycle in 1..=cycles {
            let allocations = select_for_monitors_with_remaining(
                &mut remaining,
                &outputs,
                &config,
                &mut self.rng,
            );

            for (index, allocation) in allocations.into_iter().enumerate() {
                let status = if allocation.is_skipped() {
                    warn!(canvas = %allocation.canvas, "no images selected, skipping");
                    CanvasStatus::Skipped
                } else {
                    let layout = compose_layout(&allocation.selection, &allocation.canvas);
                    let dir = output_dir(&self.cli.output_dir, &allocation.canvas);
                    let path = render_canvas(
                        &layout,
                        &allocation.canvas,
                        self.cli.background,
                        &dir,
                        &mut self.rng,
                    )?;
                    info!(canvas = %allocation.canvas, path = %path.display(), "canvas written");
                    CanvasStatus::Rendered {
                        images: layout.placements.len(),
                        path,
                    }
                };

                if let Some(ref pm) = progress {
                    pm.complete_canvas(index, &format!("cycle {cycle}"));
                }
                reports.push(CanvasReport {
                    cycle,
                    canvas: allocation.canvas,
                    status,
                });
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(reports)
    }

    /// Apply a rendered wallpaper to every output
    ///
    /// # Errors
    ///
    /// Returns an error if no outputs are found or the apply command template
    /// is invalid. Failures on individual outputs are reported, not returned.
    pub fn apply(&mut self, strategy: PickStrategy) -> Result<Vec<ApplyReport>> {
        let outputs = self.outputs()?;
        let applier: Box<dyn WallpaperApplier> = match self.cli.apply_command.as_deref() {
            Some(template) => Box::new(CommandApplier::parse(template)?),
            None => Box::new(SystemApplier),
        };

        Ok(apply_wallpapers(
            &outputs,
            &self.cli.output_dir,
            applier.as_ref(),
            strategy,
            &mut self.rng,
        ))
    }
}

/// Line announcing a generation run
pub fn generation_summary(images: usize, outputs: usize, cycles: usize) -> String {
    format!("Found {images} images, {outputs} monitor(s), generating {cycles} per monitor")
}

// Allow print for user-facing command results
#[allow(clippy::print_stdout)]
fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
