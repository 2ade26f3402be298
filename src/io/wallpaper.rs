//! Setting rendered canvases as desktop backgrounds
//!
//! Failures are reported per output and never stop the remaining outputs from
//! being processed.

use crate::io::configuration::WALLPAPER_EXTENSIONS;
use crate::io::error::{Result, WallError, file_system};
use crate::io::outputs::output_dir;
use crate::spatial::canvas::CanvasSpec;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use tracing::{info, warn};

/// Sets an image file as the background of one output
pub trait WallpaperApplier {
    /// Apply `wallpaper` to `output`, the `index`-th output (0-based)
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Apply`] if the platform call fails
    fn apply(&self, wallpaper: &Path, output: &CanvasSpec, index: usize) -> Result<()>;
}

/// Platform default applier
///
/// On macOS the picture of desktop `index + 1` is set through `osascript`.
/// Other platforms need a [`CommandApplier`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemApplier;

impl WallpaperApplier for SystemApplier {
    fn apply(&self, wallpaper: &Path, output: &CanvasSpec, index: usize) -> Result<()> {
        if !cfg!(target_os = "macos") {
            return Err(WallError::Apply {
                output: output.name.clone(),
                reason: "no wallpaper backend for this platform, pass --apply-command".to_string(),
            });
        }

        let absolute = std::path::absolute(wallpaper)
            .map_err(|e| file_system(wallpaper, "resolve path", e))?;
        let script = format!(
            "tell application \"System Events\" to set picture of desktop {} to \"{}\"",
            index + 1,
            absolute.display()
        );
        run_command(output, "osascript", &["-e".to_string(), script])
    }
}

/// Applier running a user supplied command template
///
/// The template is split on whitespace. In every argument `{path}` becomes the
/// absolute wallpaper path, `{output}` the output name and `{index}` the
/// 1-based output number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandApplier {
    program: String,
    args: Vec<String>,
}

impl CommandApplier {
    /// Parse a command template such as `swww img -o {output} {path}`
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidParameter`] if the template is blank
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| WallError::InvalidParameter {
            parameter: "apply-command",
            value: template.to_string(),
            reason: "command template is empty".to_string(),
        })?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Arguments with placeholders substituted
    pub fn expand_args(
        &self,
        wallpaper: &Path,
        output: &CanvasSpec,
        index: usize,
    ) -> Vec<String> {
        let path = wallpaper.display().to_string();
        let number = (index + 1).to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{path}", &path)
                    .replace("{output}", &output.name)
                    .replace("{index}", &number)
            })
            .collect()
    }
}

impl WallpaperApplier for CommandApplier {
    fn apply(&self, wallpaper: &Path, output: &CanvasSpec, index: usize) -> Result<()> {
        let absolute = std::path::absolute(wallpaper)
            .map_err(|e| file_system(wallpaper, "resolve path", e))?;
        let args = self.expand_args(&absolute, output, index);
        run_command(output, &self.program, &args)
    }
}

fn run_command(output: &CanvasSpec, program: &str, args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| WallError::Apply {
            output: output.name.clone(),
            reason: format!("could not run {program}: {e}"),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(WallError::Apply {
            output: output.name.clone(),
            reason: format!("{program} exited with {status}"),
        })
    }
}

/// How a wallpaper is chosen among an output's rendered files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickStrategy {
    /// Most recently modified file
    #[default]
    Latest,
    /// Uniformly random file
    Random,
}

/// Choose a rendered wallpaper from `dir`
///
/// Only `jpg`, `jpeg` and `png` files are considered. Returns `None` when the
/// directory does not exist or holds no such file.
///
/// # Errors
///
/// Returns [`WallError::FileSystem`] if the directory cannot be listed
pub fn pick_wallpaper<R: Rng + ?Sized>(
    dir: &Path,
    strategy: PickStrategy,
    rng: &mut R,
) -> Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| file_system(dir, "read directory", e))? {
        let path = entry
            .map_err(|e| file_system(dir, "read directory entry", e))?
            .path();
        if path.is_file() && is_wallpaper(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    let picked = match strategy {
        PickStrategy::Latest => candidates
            .into_iter()
            .max_by_key(|path| (modified_time(path), path.clone())),
        PickStrategy::Random => candidates.choose(rng).cloned(),
    };

    Ok(picked)
}

fn is_wallpaper(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WALLPAPER_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn modified_time(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Result of applying a wallpaper to one output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyStatus {
    /// The wallpaper at this path was set
    Applied(PathBuf),
    /// No rendered wallpaper exists for the output
    Skipped,
    /// Picking or setting the wallpaper failed
    Failed(String),
}

/// Per-output outcome of [`apply_wallpapers`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Output name
    pub output: String,
    /// What happened
    pub status: ApplyStatus,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ApplyStatus::Applied(path) => {
                write!(f, "{}: Applied {}", self.output, path.display())
            }
            ApplyStatus::Skipped => write!(f, "{}: Skipped (no wallpapers)", self.output),
            ApplyStatus::Failed(reason) => write!(f, "{}: Failed ({reason})", self.output),
        }
    }
}

/// Pick and apply a wallpaper for every output
///
/// Each output looks in its own directory under `output_root`.
pub fn apply_wallpapers<A, R>(
    outputs: &[CanvasSpec],
    output_root: &Path,
    applier: &A,
    strategy: PickStrategy,
    rng: &mut R,
) -> Vec<ApplyReport>
where
    A: WallpaperApplier + ?Sized,
    R: Rng + ?Sized,
{
    outputs
        .iter()
        .enumerate()
        .map(|(index, output)| {
            let dir = output_dir(output_root, output);
            let status = match pick_wallpaper(&dir, strategy, rng) {
                Ok(Some(wallpaper)) => match applier.apply(&wallpaper, output, index) {
                    Ok(()) => {
                        info!(
                            output = %output.name,
                            wallpaper = %wallpaper.display(),
                            "wallpaper applied"
                        );
                        ApplyStatus::Applied(wallpaper)
                    }
                    Err(error) => {
                        warn!("{error}");
                        ApplyStatus::Failed(error.to_string())
                    }
                },
                Ok(None) => {
                    warn!(
                        "no wallpapers found for {output} in '{}', skipping",
                        dir.display()
                    );
                    ApplyStatus::Skipped
                }
                Err(error) => {
                    warn!("{error}");
                    ApplyStatus::Failed(error.to_string())
                }
            };

            ApplyReport {
                output: output.name.clone(),
                status,
            }
        })
        .collect()
}
