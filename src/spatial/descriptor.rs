//! Image descriptors and the deduplicated catalog they form
//!
//! Descriptors carry only what the packing engine needs: an identifier and the
//! declared pixel dimensions read from the file header. Pixel data is never
//! held here.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use crate::math::geometry::scaled_dimensions;

/// Identifier plus declared dimensions of one catalog image
///
/// Equality and hashing use the path only; two different files may share
/// dimensions and must still be treated as distinct images.
#[derive(Debug, Clone)]
pub struct ImageDescriptor {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl ImageDescriptor {
    /// Create a descriptor for the image at `path`
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Identifier of the image
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Declared height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions after fitting this image into a `box_w` x `box_h` box
    pub fn scaled_to(&self, box_w: u32, box_h: u32) -> (f64, f64) {
        scaled_dimensions(self.width, self.height, box_w, box_h)
    }
}

impl PartialEq for ImageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ImageDescriptor {}

impl Hash for ImageDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Ordered, identifier-unique sequence of image descriptors
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    images: Vec<ImageDescriptor>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of each identifier
    pub fn new(images: impl IntoIterator<Item = ImageDescriptor>) -> Self {
        let mut seen = HashSet::new();
        let images = images
            .into_iter()
            .filter(|image| seen.insert(image.path.clone()))
            .collect();
        Self { images }
    }

    /// Number of images
    pub const fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the catalog holds no images
    pub const fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images in catalog order
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Iterate over images in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, ImageDescriptor> {
        self.images.iter()
    }

    /// Image at `index` in catalog order
    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.images.get(index)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ImageDescriptor;
    type IntoIter = std::slice::Iter<'a, ImageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

impl FromIterator<ImageDescriptor> for Catalog {
    fn from_iter<T: IntoIterator<Item = ImageDescriptor>>(iter: T) -> Self {
        Self::new(iter)
    }
}
