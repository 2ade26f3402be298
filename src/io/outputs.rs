//! Enumeration of output canvases (monitors)
//!
//! Outputs are either given explicitly as `NAME=WIDTHxHEIGHT` or detected by
//! parsing the report of the platform's display tool.

use crate::io::error::{Result, WallError, invalid_parameter};
use crate::spatial::canvas::CanvasSpec;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of the canvases to generate wallpapers for
pub trait OutputEnumerator {
    /// List outputs in display order
    ///
    /// # Errors
    ///
    /// Returns an error if the outputs cannot be queried
    fn list_outputs(&self) -> Result<Vec<CanvasSpec>>;
}

/// Fixed list of outputs, typically from the command line
#[derive(Debug, Clone, Default)]
pub struct StaticOutputs {
    outputs: Vec<CanvasSpec>,
}

impl StaticOutputs {
    /// Use exactly these outputs
    pub const fn new(outputs: Vec<CanvasSpec>) -> Self {
        Self { outputs }
    }
}

impl OutputEnumerator for StaticOutputs {
    fn list_outputs(&self) -> Result<Vec<CanvasSpec>> {
        Ok(self.outputs.clone())
    }
}

/// Outputs reported by the operating system's display tool
///
/// Uses `xrandr --query` on Linux and `system_profiler SPDisplaysDataType` on
/// macOS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOutputs;

impl OutputEnumerator for SystemOutputs {
    fn list_outputs(&self) -> Result<Vec<CanvasSpec>> {
        if cfg!(target_os = "macos") {
            run_report("system_profiler", &["SPDisplaysDataType"])
                .map(|report| parse_system_profiler(&report))
        } else if cfg!(target_os = "linux") {
            run_report("xrandr", &["--query"]).map(|report| parse_xrandr(&report))
        } else {
            Err(WallError::OutputDetection {
                reason: "no display query tool for this platform, pass --output instead"
                    .to_string(),
            })
        }
    }
}

fn run_report(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| WallError::OutputDetection {
            reason: format!("could not run {program}: {e}"),
        })?;

    if !output.status.success() {
        return Err(WallError::OutputDetection {
            reason: format!("{program} exited with {}", output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse an explicit `NAME=WIDTHxHEIGHT` output definition
///
/// # Errors
///
/// Returns [`WallError::InvalidParameter`] if the text is malformed or a
/// dimension is zero.
pub fn parse_output_spec(text: &str) -> Result<CanvasSpec> {
    let (name, size) = text
        .split_once('=')
        .ok_or_else(|| invalid_parameter("output", &text, &"expected NAME=WIDTHxHEIGHT"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid_parameter("output", &text, &"output name is empty"));
    }

    let (width, height) = parse_resolution(size.trim())
        .ok_or_else(|| invalid_parameter("output", &text, &"expected WIDTHxHEIGHT"))?;

    Ok(CanvasSpec::new(name, width, height))
}

/// Parse `WIDTHxHEIGHT`, optionally followed by an `+X+Y` position
fn parse_resolution(text: &str) -> Option<(u32, u32)> {
    let size = text.split('+').next()?;
    let (width, height) = size.split_once(['x', 'X'])?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

/// Connected outputs from an `xrandr --query` report
///
/// Connected but disabled outputs (no current mode) are skipped.
pub fn parse_xrandr(report: &str) -> Vec<CanvasSpec> {
    report
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let name = tokens.next()?;
            if tokens.next()? != "connected" {
                return None;
            }
            let (width, height) = tokens
                .take_while(|token| !token.starts_with('('))
                .filter(|token| token.contains('+'))
                .find_map(parse_resolution)?;
            Some(CanvasSpec::new(name, width, height))
        })
        .collect()
}

/// Displays from a `system_profiler SPDisplaysDataType` report
///
/// Each `Resolution:` line is attributed to the closest preceding section
/// header; displays without a usable header are named `monitor<index>`.
pub fn parse_system_profiler(report: &str) -> Vec<CanvasSpec> {
    let mut outputs = Vec::new();
    let mut current_name: Option<String> = None;

    for line in report.lines() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_suffix(':') {
            if !header.contains(':') && !header.ends_with("Displays") {
                current_name = Some(header.to_string());
            }
            continue;
        }

        let Some(value) = trimmed.strip_prefix("Resolution:") else {
            continue;
        };
        let mut numbers = value
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse::<u32>().ok());
        let (Some(width), Some(height)) = (numbers.next(), numbers.next()) else {
            continue;
        };
        if width == 0 || height == 0 {
            continue;
        }

        let name = current_name
            .take()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| format!("monitor{}", outputs.len()));
        outputs.push(CanvasSpec::new(name, width, height));
    }

    outputs
}

/// Directory receiving the rendered canvases of `canvas`
pub fn output_dir(root: &Path, canvas: &CanvasSpec) -> PathBuf {
    root.join(canvas.directory_name())
}
