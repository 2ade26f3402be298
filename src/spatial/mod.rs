//! Spatial data structures for packing images onto canvases
//!
//! This module contains:
//! - Image descriptors and the catalog
//! - Canvas specifications
//! - Final row layout computation

/// Output canvas specification
pub mod canvas;
/// Image descriptors and catalog deduplication
pub mod descriptor;
/// Row placement of a selection on a canvas
pub mod layout;

pub use canvas::CanvasSpec;
pub use descriptor::{Catalog, ImageDescriptor};
pub use layout::{Layout, PlacedImage, compose_layout};
