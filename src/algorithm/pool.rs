use crate::spatial::descriptor::ImageDescriptor;
use rand::Rng;
use rand::seq::index;

/// Number of images drawn into a pool from `available` candidates
///
/// `max(1, floor(available * pool_ratio))`, capped at `available`; zero when
/// nothing is available.
pub fn pool_size(available: usize, pool_ratio: f64) -> usize {
    if available == 0 {
        return 0;
    }
    let scaled = (available as f64 * pool_ratio).floor();
    // Saturating float-to-int cast maps negative and NaN ratios to zero
    (scaled as usize).max(1).min(available)
}

/// Draw a random pool of distinct candidates without replacement
///
/// The pool bounds the search space of one selection round. Drawn entries keep
/// their relative input order so later stable sorts break ties by catalog order.
pub fn generate_pool<'a, I, R>(
    candidates: I,
    pool_ratio: f64,
    rng: &mut R,
) -> Vec<&'a ImageDescriptor>
where
    I: IntoIterator<Item = &'a ImageDescriptor>,
    R: Rng + ?Sized,
{
    let candidates: Vec<&ImageDescriptor> = candidates.into_iter().collect();
    let amount = pool_size(candidates.len(), pool_ratio);
    if amount == 0 {
        return Vec::new();
    }

    let mut picked = index::sample(rng, candidates.len(), amount).into_vec();
    picked.sort_unstable();

    picked
        .into_iter()
        .filter_map(|position| candidates.get(position).copied())
        .collect()
}
