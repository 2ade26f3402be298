//! Tests for pool sizing and sampling without replacement

#[cfg(test)]
mod tests {
    use mosaicwall::algorithm::pool::{generate_pool, pool_size};
    use mosaicwall::spatial::descriptor::{Catalog, ImageDescriptor};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn catalog(count: usize) -> Catalog {
        (0..count)
            .map(|i| ImageDescriptor::new(format!("img{i:03}.jpg"), 100 + i as u32, 100))
            .collect()
    }

    // Tests pool size formula including the minimum of one and the cap
    // Verified by removing the min(available) cap
    #[test]
    fn test_pool_size_bounds() {
        assert_eq!(pool_size(0, 0.2), 0);
        assert_eq!(pool_size(1, 0.2), 1);
        assert_eq!(pool_size(4, 0.2), 1);
        assert_eq!(pool_size(5, 0.2), 1);
        assert_eq!(pool_size(10, 0.2), 2);
        assert_eq!(pool_size(99, 0.2), 19);
        assert_eq!(pool_size(10, 1.0), 10);
        assert_eq!(pool_size(10, 3.0), 10);
        assert_eq!(pool_size(10, -1.0), 1);
        assert_eq!(pool_size(10, f64::NAN), 1);
    }

    // Tests empty input yields an empty pool
    // Verified by returning max(1) for zero available images
    #[test]
    fn test_generate_pool_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = Catalog::default();
        assert!(generate_pool(empty.iter(), 0.2, &mut rng).is_empty());
    }

    // Tests pool length matches the formula for many catalog sizes
    // Verified by using ceil instead of floor
    #[test]
    fn test_generate_pool_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..60 {
            let catalog = catalog(count);
            for ratio in [0.1, 0.2, 0.5, 1.0] {
                let pool = generate_pool(catalog.iter(), ratio, &mut rng);
                assert_eq!(pool.len(), pool_size(count, ratio), "count {count} ratio {ratio}");
            }
        }
    }

    // Tests drawn entries are distinct and keep catalog order
    // Verified by skipping the index sort after sampling
    #[test]
    fn test_generate_pool_distinct_and_ordered() {
        let catalog = catalog(50);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let pool = generate_pool(catalog.iter(), 0.4, &mut rng);
            let unique: HashSet<_> = pool.iter().map(|image| image.path()).collect();
            assert_eq!(unique.len(), pool.len());

            let positions: Vec<usize> = pool
                .iter()
                .filter_map(|image| catalog.iter().position(|c| c == *image))
                .collect();
            assert!(positions.windows(2).all(|w| w.first() < w.get(1)));
        }
    }

    // Tests the same seed reproduces the same pool
    // Verified by seeding a fresh OS rng inside generate_pool
    #[test]
    fn test_generate_pool_seeded_reproducible() {
        let catalog = catalog(30);
        let first = generate_pool(catalog.iter(), 0.3, &mut StdRng::seed_from_u64(9));
        let second = generate_pool(catalog.iter(), 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    // Tests every catalog entry can be drawn
    // Verified by sampling from length minus one
    #[test]
    fn test_generate_pool_covers_catalog() {
        let catalog = catalog(10);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            for image in generate_pool(catalog.iter(), 0.2, &mut rng) {
                seen.insert(image.path().to_path_buf());
            }
        }

        assert_eq!(seen.len(), 10);
    }
}
