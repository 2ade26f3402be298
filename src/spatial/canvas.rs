use crate::io::configuration::DEFAULT_BORDER_PX;
use std::fmt;

/// One output target a selection is packed into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Output name, unique per run (e.g. `HDMI-1` or `monitor0`)
    pub name: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Gap between adjacent images in pixels
    pub border_px: u32,
}

impl CanvasSpec {
    /// Create a canvas with the default border
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            border_px: DEFAULT_BORDER_PX,
        }
    }

    /// Replace the border width
    #[must_use]
    pub const fn with_border(mut self, border_px: u32) -> Self {
        self.border_px = border_px;
        self
    }

    /// Directory name used for this output's rendered files: `<W>x<H>_<name>`
    pub fn directory_name(&self) -> String {
        format!("{}x{}_{}", self.width, self.height, self.name)
    }
}

impl fmt::Display for CanvasSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}
