use crate::io::configuration::SECOND_HERO_THRESHOLD;
use crate::spatial::descriptor::ImageDescriptor;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// Images chosen for one canvas in left-to-right placement order
pub type Selection = Vec<ImageDescriptor>;

/// Pool entry with its scaled width precomputed for the current canvas
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    image: &'a ImageDescriptor,
    width: f64,
}

/// Pick images from `pool` that fit side by side on a full canvas row
///
/// Equivalent to [`select_into`] with the whole canvas width as budget.
pub fn select_images<R: Rng + ?Sized>(
    pool: &[&ImageDescriptor],
    canvas_width: u32,
    canvas_height: u32,
    border: u32,
    rng: &mut R,
) -> Selection {
    select_into(
        pool,
        canvas_width,
        canvas_height,
        border,
        f64::from(canvas_width),
        rng,
    )
}

/// Hero plus greedy-fill selection within a horizontal `budget`
///
/// Widths are always computed by fitting each image into the full
/// `canvas_width` x `canvas_height` box; `budget` only limits how much of the
/// row this call may fill. The packed width of the result, borders included,
/// never exceeds `budget`.
///
/// 1. Candidates wider than the budget are discarded.
/// 2. A first hero is drawn uniformly at random.
/// 3. If that hero covers less than half the canvas width, a second hero is drawn
///    from the candidates that still fit after one border.
/// 4. The rest are visited narrowest first (ties in pool order) and accepted
///    whenever they still fit.
pub fn select_into<R: Rng + ?Sized>(
    pool: &[&ImageDescriptor],
    canvas_width: u32,
    canvas_height: u32,
    border: u32,
    budget: f64,
    rng: &mut R,
) -> Selection {
    if pool.is_empty() || budget <= 0.0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut available: Vec<Candidate<'_>> = pool
        .iter()
        .copied()
        .filter(|&image| seen.insert(image.path()))
        .map(|image| Candidate {
            image,
            width: image.scaled_to(canvas_width, canvas_height).0,
        })
        .filter(|candidate| candidate.width > 0.0 && candidate.width <= budget)
        .collect();

    if available.is_empty() {
        return Vec::new();
    }

    let border = f64::from(border);
    let mut selected = Vec::with_capacity(available.len());

    let hero = available.remove(rng.random_range(0..available.len()));
    let mut used_width = hero.width;
    selected.push(hero.image.clone());

    let hero_limit = f64::from(canvas_width) * SECOND_HERO_THRESHOLD;
    if hero.width < hero_limit && !available.is_empty() {
        let remaining_space = budget - used_width - border;
        let fitting: Vec<usize> = available
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.width <= remaining_space)
            .map(|(position, _)| position)
            .collect();

        if let Some(&position) = fitting.choose(rng) {
            let second = available.remove(position);
            used_width += border + second.width;
            selected.push(second.image.clone());
        }
    }

    // Stable sort keeps pool order among equal widths
    available.sort_by(|a, b| a.width.total_cmp(&b.width));

    for candidate in available {
        let needed = border + candidate.width;
        if used_width + needed <= budget {
            used_width += needed;
            selected.push(candidate.image.clone());
        }
    }

    selected
}
