//! Final placement of a selection on its canvas
//!
//! Images are laid out as a single row, centered horizontally, each one
//! centered vertically, with a fixed border between neighbours. The result is
//! the contract consumed by the rasterizer.

use crate::math::geometry::packed_width;
use crate::spatial::canvas::CanvasSpec;
use crate::spatial::descriptor::ImageDescriptor;

/// Position and size of one image on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    /// The image being placed
    pub descriptor: ImageDescriptor,
    /// Left edge in canvas pixels
    pub x_offset: u32,
    /// Top edge in canvas pixels
    pub y_offset: u32,
    /// Width after fit-to-box scaling
    pub scaled_width: f64,
    /// Height after fit-to-box scaling
    pub scaled_height: f64,
    /// Rasterized width; ends at or before the next placement's border
    pub pixel_width: u32,
    /// Rasterized height
    pub pixel_height: u32,
}

impl PlacedImage {
    /// Integer pixel size used when rasterizing
    ///
    /// May be zero for slivers narrower than a pixel, which are not drawn.
    pub const fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    /// Right edge in canvas pixels
    pub fn right_edge(&self) -> f64 {
        f64::from(self.x_offset) + self.scaled_width
    }
}

/// Placed row of images for one canvas
#[derive(Debug, Clone, Default)]
pub struct Layout {
    /// Images in left-to-right order
    pub placements: Vec<PlacedImage>,
    /// Packed width of the row including borders
    pub total_width: f64,
}

impl Layout {
    /// Whether no image was placed
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Compute the placement of `selection` on `canvas`
///
/// Scaled sizes are recomputed with the same fit-to-box rule the selector uses.
/// Should the row still overflow the canvas, trailing images are dropped until
/// it fits or a single image remains.
pub fn compose_layout(selection: &[ImageDescriptor], canvas: &CanvasSpec) -> Layout {
    let border = canvas.border_px;

    let mut sized: Vec<(&ImageDescriptor, (f64, f64))> = selection
        .iter()
        .map(|image| (image, image.scaled_to(canvas.width, canvas.height)))
        .collect();

    let mut total_width = packed_width(sized.iter().map(|(_, (w, _))| *w), border);
    while total_width > f64::from(canvas.width) && sized.len() > 1 {
        sized.pop();
        total_width = packed_width(sized.iter().map(|(_, (w, _))| *w), border);
    }

    let canvas_width = f64::from(canvas.width);
    let canvas_height = f64::from(canvas.height);
    let start_offset = ((canvas_width - total_width) / 2.0).max(0.0).floor();

    let mut cursor = start_offset;
    let placements = sized
        .into_iter()
        .map(|(image, (scaled_width, scaled_height))| {
            let y_offset = ((canvas_height - scaled_height) / 2.0).max(0.0).floor();
            let left = cursor.floor();
            let right = (cursor + scaled_width).floor();
            let placed = PlacedImage {
                descriptor: image.clone(),
                x_offset: left as u32,
                y_offset: y_offset as u32,
                scaled_width,
                scaled_height,
                pixel_width: (right - left) as u32,
                pixel_height: scaled_height.floor() as u32,
            };
            cursor += scaled_width + f64::from(border);
            placed
        })
        .collect();

    Layout {
        placements,
        total_width,
    }
}

