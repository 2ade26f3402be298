//! Multi-monitor wallpaper collages packed from an image catalog
//!
//! A random pool is drawn from the catalog, a hero image anchors each canvas,
//! and the rest of the row is filled greedily narrowest-first. Canvases share a
//! draining catalog so simultaneously displayed outputs never repeat an image
//! until every image has been shown.

#![forbid(unsafe_code)]

/// Pool sampling, selection and multi-canvas allocation
pub mod algorithm;
/// Catalog, output, rendering and wallpaper collaborators plus error handling
pub mod io;
/// Scaling arithmetic
pub mod math;
/// Image descriptors, canvases and row layout
pub mod spatial;

pub use io::error::{Result, WallError};
