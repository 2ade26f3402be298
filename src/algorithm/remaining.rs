use crate::spatial::descriptor::{Catalog, ImageDescriptor};
use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Working copy of a catalog that images are drained from as they are used
///
/// The catalog itself is kept intact as an arena; a presence bitset tracks which
/// entries are still available. Iteration always follows catalog order, and a
/// refill restores every entry in O(n) without reallocating.
#[derive(Clone, Debug)]
pub struct RemainingCatalog {
    catalog: Catalog,
    index: HashMap<PathBuf, usize>,
    present: BitVec,
}

impl RemainingCatalog {
    /// Start with every catalog entry available
    pub fn new(catalog: Catalog) -> Self {
        let index = catalog
            .iter()
            .enumerate()
            .map(|(position, image)| (image.path().to_path_buf(), position))
            .collect();
        let present = bitvec![1; catalog.len()];

        Self {
            catalog,
            index,
            present,
        }
    }

    /// The full catalog this working copy was drawn from
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of images still available
    pub fn len(&self) -> usize {
        self.present.count_ones()
    }

    /// Test if no image is available
    pub fn is_empty(&self) -> bool {
        self.present.not_any()
    }

    /// Test image availability by identifier
    pub fn contains(&self, image: &ImageDescriptor) -> bool {
        self.index
            .get(image.path())
            .is_some_and(|&position| self.present.get(position).as_deref() == Some(&true))
    }

    /// Mark an image as consumed
    ///
    /// Returns `false` if the image is unknown or was already consumed
    pub fn remove(&mut self, image: &ImageDescriptor) -> bool {
        let Some(&position) = self.index.get(image.path()) else {
            return false;
        };
        let was_present = self.present.get(position).as_deref() == Some(&true);
        if was_present {
            self.present.set(position, false);
        }
        was_present
    }

    /// Make every catalog entry available again
    pub fn refill(&mut self) {
        self.present.fill(true);
    }

    /// Available images in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> + '_ {
        self.present
            .iter_ones()
            .filter_map(|position| self.catalog.get(position))
    }
}

impl From<Catalog> for RemainingCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

impl fmt::Display for RemainingCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RemainingCatalog({} of {} images)",
            self.len(),
            self.catalog.len()
        )
    }
}
