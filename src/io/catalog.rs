//! Image catalog backed by a directory of image files
//!
//! Only file headers are read to learn each image's dimensions; pixel data is
//! decoded later by the rasterizer, and only for the images actually placed.

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{Result, WallError, file_system};
use crate::spatial::descriptor::{Catalog, ImageDescriptor};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of the image catalog for one invocation
pub trait CatalogProvider {
    /// List every usable image with its declared dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog source itself cannot be read. Individual
    /// unreadable images are skipped rather than reported.
    fn list_catalog(&self) -> Result<Catalog>;
}

/// Catalog of the supported image files found directly inside a directory
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    dir: PathBuf,
}

impl DirectoryCatalog {
    /// Catalog the images in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The scanned directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CatalogProvider for DirectoryCatalog {
    fn list_catalog(&self) -> Result<Catalog> {
        if !self.dir.is_dir() {
            debug!(dir = %self.dir.display(), "catalog directory missing");
            return Ok(Catalog::default());
        }

        let entries =
            std::fs::read_dir(&self.dir).map_err(|e| file_system(&self.dir, "read directory", e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| file_system(&self.dir, "read directory entry", e))?
                .path();
            if path.is_file() && has_supported_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let images = paths.into_iter().filter_map(|path| match read_descriptor(&path) {
            Ok(image) => Some(image),
            Err(error) => {
                warn!("skipping unreadable image: {error}");
                None
            }
        });

        Ok(Catalog::new(images))
    }
}

/// Whether `path` carries one of the catalog's image extensions
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Read an image's dimensions from its header
///
/// # Errors
///
/// Returns [`WallError::ImageLoad`] if the header cannot be read or declares a
/// zero-sized image.
pub fn read_descriptor(path: &Path) -> Result<ImageDescriptor> {
    let (width, height) = image::image_dimensions(path).map_err(|e| WallError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    if width == 0 || height == 0 {
        return Err(WallError::ImageLoad {
            path: path.to_path_buf(),
            source: image::ImageError::Limits(image::error::LimitError::from_kind(
                image::error::LimitErrorKind::DimensionError,
            )),
        });
    }

    Ok(ImageDescriptor::new(path, width, height))
}

/// Copy an image into the catalog directory and report its dimensions
///
/// A file that already lives in `images_dir` is not copied again.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the file cannot be
/// copied, or the copied file is not a readable image.
pub fn load_image(source: &Path, images_dir: &Path) -> Result<ImageDescriptor> {
    std::fs::create_dir_all(images_dir).map_err(|e| file_system(images_dir, "create directory", e))?;

    let file_name = source.file_name().ok_or_else(|| WallError::InvalidParameter {
        parameter: "path",
        value: source.display().to_string(),
        reason: "path does not name a file".to_string(),
    })?;
    let destination = images_dir.join(file_name);

    let same_file = match (source.canonicalize(), destination.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if !same_file {
        std::fs::copy(source, &destination).map_err(|e| file_system(source, "copy", e))?;
    }

    read_descriptor(&destination)
}
