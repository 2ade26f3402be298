//! Selection across several canvases sharing one draining catalog
//!
//! Canvases are filled strictly in order. Images placed on one canvas are
//! removed from the shared [`RemainingCatalog`], so outputs shown side by side
//! never repeat an image until the catalog has been used up. When a canvas
//! starts with nothing left, the catalog is refilled and repeats become
//! possible again.

use crate::algorithm::pool::generate_pool;
use crate::algorithm::remaining::RemainingCatalog;
use crate::algorithm::selection::{Selection, select_into};
use crate::io::configuration::{DEFAULT_POOL_RATIO, FILL_THRESHOLD};
use crate::math::geometry::packed_width;
use crate::spatial::canvas::CanvasSpec;
use crate::spatial::descriptor::Catalog;
use rand::Rng;
use tracing::debug;

/// Tunables of the multi-canvas allocation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationConfig {
    /// Fraction of the remaining catalog drawn into each pool
    pub pool_ratio: f64,
    /// Fraction of the canvas width after which a canvas counts as full
    pub fill_threshold: f64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            pool_ratio: DEFAULT_POOL_RATIO,
            fill_threshold: FILL_THRESHOLD,
        }
    }
}

/// Outcome of filling one canvas
#[derive(Debug, Clone)]
pub struct CanvasAllocation {
    /// The canvas that was filled
    pub canvas: CanvasSpec,
    /// Images in left-to-right order, empty if nothing fit
    pub selection: Selection,
    /// Whether the shared catalog was refilled before this canvas
    pub refilled: bool,
    /// Pool draws performed for this canvas
    pub rounds: usize,
}

impl CanvasAllocation {
    /// Whether no image could be placed on this canvas
    pub const fn is_skipped(&self) -> bool {
        self.selection.is_empty()
    }

    /// Packed width of the selection including borders
    pub fn packed_width(&self) -> f64 {
        packed_width(
            self.selection
                .iter()
                .map(|image| image.scaled_to(self.canvas.width, self.canvas.height).0),
            self.canvas.border_px,
        )
    }
}

/// Select images for every canvas from a fresh copy of `catalog`
pub fn select_for_monitors<R: Rng + ?Sized>(
    catalog: &Catalog,
    canvases: &[CanvasSpec],
    config: &AllocationConfig,
    rng: &mut R,
) -> Vec<CanvasAllocation> {
    let mut remaining = RemainingCatalog::new(catalog.clone());
    select_for_monitors_with_remaining(&mut remaining, canvases, config, rng)
}

/// Select images for every canvas, draining a caller-owned catalog
///
/// Passing the same `remaining` to consecutive calls continues where the
/// previous generation cycle stopped, so images are not repeated across
/// cycles until every image has been used once.
pub fn select_for_monitors_with_remaining<R: Rng + ?Sized>(
    remaining: &mut RemainingCatalog,
    canvases: &[CanvasSpec],
    config: &AllocationConfig,
    rng: &mut R,
) -> Vec<CanvasAllocation> {
    canvases
        .iter()
        .map(|canvas| allocate_canvas(remaining, canvas, config, rng))
        .collect()
}

/// Fill one canvas with successive pool draws until it is full enough
///
/// Every round either removes at least one image from `remaining` or ends the
/// loop, so the number of rounds is bounded by the catalog size.
pub fn allocate_canvas<R: Rng + ?Sized>(
    remaining: &mut RemainingCatalog,
    canvas: &CanvasSpec,
    config: &AllocationConfig,
    rng: &mut R,
) -> CanvasAllocation {
    let refilled = remaining.is_empty() && !remaining.catalog().is_empty();
    if refilled {
        debug!(canvas = %canvas.name, "catalog exhausted, refilling");
        remaining.refill();
    }

    let canvas_width = f64::from(canvas.width);
    let border = f64::from(canvas.border_px);
    let target_width = config.fill_threshold * canvas_width;

    let mut selection = Selection::new();
    let mut used_width = 0.0;
    let mut rounds = 0;

    while !remaining.is_empty() {
        let budget = if selection.is_empty() {
            canvas_width
        } else {
            canvas_width - used_width - border
        };

        let pool = generate_pool(remaining.iter(), config.pool_ratio, rng);
        let picked = select_into(
            &pool,
            canvas.width,
            canvas.height,
            canvas.border_px,
            budget,
            rng,
        );
        rounds += 1;

        if picked.is_empty() {
            debug!(
                canvas = %canvas.name,
                pool = pool.len(),
                budget,
                "no candidate fits, canvas done"
            );
            break;
        }

        for image in &picked {
            remaining.remove(image);
        }
        selection.extend(picked);

        used_width = packed_width(
            selection
                .iter()
                .map(|image| image.scaled_to(canvas.width, canvas.height).0),
            canvas.border_px,
        );
        debug!(
            canvas = %canvas.name,
            round = rounds,
            images = selection.len(),
            used_width,
            remaining = remaining.len(),
            "selection round"
        );

        if used_width >= target_width {
            break;
        }
    }

    CanvasAllocation {
        canvas: canvas.clone(),
        selection,
        refilled,
        rounds,
    }
}
