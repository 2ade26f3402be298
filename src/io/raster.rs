//! JPEG export of a composed canvas

use crate::io::configuration::{JPEG_QUALITY, OUTPUT_EXTENSION, SHORT_ID_LEN};
use crate::io::error::{Result, WallError, file_system};
use crate::spatial::canvas::CanvasSpec;
use crate::spatial::layout::Layout;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paint every placed image onto a canvas filled with `background`
///
/// Each source is decoded, resized with Lanczos3 to its placement size and
/// pasted at its offsets. Placements thinner than a pixel are skipped.
///
/// # Errors
///
/// Returns [`WallError::ImageLoad`] if a placed image cannot be decoded
pub fn paint_canvas(
    layout: &Layout,
    canvas: &CanvasSpec,
    background: [u8; 3],
) -> Result<RgbImage> {
    let mut img = RgbImage::from_pixel(canvas.width, canvas.height, Rgb(background));

    for placed in &layout.placements {
        let (width, height) = placed.pixel_size();
        if width == 0 || height == 0 {
            continue;
        }

        let path = placed.descriptor.path();
        let source = image::open(path).map_err(|e| WallError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let resized = source
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_rgb8();
        debug!(
            image = %path.display(),
            x = placed.x_offset,
            y = placed.y_offset,
            width,
            height,
            "placing image"
        );
        imageops::overlay(
            &mut img,
            &resized,
            i64::from(placed.x_offset),
            i64::from(placed.y_offset),
        );
    }

    Ok(img)
}

/// Render `layout` and save it as a JPEG inside `output_dir`
///
/// The file is named `<height>_<width>_<id>.jpg` with a short random id so
/// repeated generations into one directory do not collide. Returns the path of
/// the written file.
///
/// # Errors
///
/// Returns an error if:
/// - A placed image cannot be decoded
/// - The output directory cannot be created
/// - The JPEG cannot be encoded or written
pub fn render_canvas<R: Rng + ?Sized>(
    layout: &Layout,
    canvas: &CanvasSpec,
    background: [u8; 3],
    output_dir: &Path,
    rng: &mut R,
) -> Result<PathBuf> {
    let img = paint_canvas(layout, canvas, background)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| file_system(output_dir, "create directory", e))?;

    let output_path = output_dir.join(output_file_name(canvas, rng));
    save_jpeg(&img, &output_path)?;

    Ok(output_path)
}

/// File name for a new rendering of `canvas`
pub fn output_file_name<R: Rng + ?Sized>(canvas: &CanvasSpec, rng: &mut R) -> String {
    format!(
        "{}_{}_{}.{OUTPUT_EXTENSION}",
        canvas.height,
        canvas.width,
        short_id(rng)
    )
}

/// Random lowercase hex identifier of [`SHORT_ID_LEN`] characters
pub fn short_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_ID_LEN)
        .filter_map(|_| char::from_digit(rng.random_range(0..16), 16))
        .collect()
}

fn save_jpeg(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| file_system(path, "create file", e))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);

    img.write_with_encoder(encoder)
        .map_err(|e| WallError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    writer
        .flush()
        .map_err(|e| file_system(path, "write file", e))
}
