//! Tests for row placement, centering and overflow handling

#[cfg(test)]
mod tests {
    use mosaicwall::spatial::canvas::CanvasSpec;
    use mosaicwall::spatial::descriptor::ImageDescriptor;
    use mosaicwall::spatial::layout::compose_layout;

    const EPSILON: f64 = 1e-9;

    // Full-height images whose scaled width equals their declared width
    fn column(name: &str, width: u32) -> ImageDescriptor {
        ImageDescriptor::new(name, width, 1080)
    }

    // Tests an empty selection produces an empty layout
    // Verified by seeding total_width with one border
    #[test]
    fn test_compose_empty_selection() {
        let layout = compose_layout(&[], &CanvasSpec::new("m", 1000, 1080));
        assert!(layout.is_empty());
        assert!(layout.total_width.abs() < EPSILON);
    }

    // Tests the row is centered and offsets advance by width plus border
    // Verified by advancing the cursor without the border
    #[test]
    fn test_compose_centers_row() {
        let canvas = CanvasSpec::new("m", 1000, 1080);
        let selection = vec![column("a", 100), column("b", 200), column("c", 300)];

        let layout = compose_layout(&selection, &canvas);

        // 600 of images plus two 20px borders
        assert!((layout.total_width - 640.0).abs() < EPSILON);
        let offsets: Vec<u32> = layout.placements.iter().map(|p| p.x_offset).collect();
        assert_eq!(offsets, vec![180, 300, 520]);
        assert!(layout.placements.iter().all(|p| p.y_offset == 0));
    }

    // Tests odd leftover space is floored and the last image stays on canvas
    // Verified by using the whole leftover as the start offset
    #[test]
    fn test_compose_first_offset_floored() {
        let canvas = CanvasSpec::new("m", 1001, 1080).with_border(15);
        let selection = vec![column("a", 250), column("b", 400)];

        let layout = compose_layout(&selection, &canvas);

        let total = 250.0 + 400.0 + 15.0;
        let expected_start = ((1001.0 - total) / 2.0_f64).floor() as u32;
        assert_eq!(
            layout.placements.first().map(|p| p.x_offset),
            Some(expected_start)
        );
        let right_edge = layout.placements.last().map_or(0.0, |p| p.right_edge());
        assert!(right_edge <= 1001.0);
    }

    // Tests shorter images are centered vertically
    // Verified by fixing y_offset at zero
    #[test]
    fn test_compose_vertical_centering() {
        let canvas = CanvasSpec::new("m", 1920, 1080);
        // Width-constrained: scales to 1920x540
        let selection = vec![ImageDescriptor::new("banner", 3840, 1080)];

        let layout = compose_layout(&selection, &canvas);
        let placed = layout.placements.first();

        assert_eq!(placed.map(|p| p.x_offset), Some(0));
        assert_eq!(placed.map(|p| p.y_offset), Some(270));
        assert_eq!(placed.map(|p| p.pixel_size()), Some((1920, 540)));
    }

    // Tests trailing images are dropped when the row would overflow
    // Verified by removing the overflow trimming loop
    #[test]
    fn test_compose_drops_overflowing_tail() {
        let canvas = CanvasSpec::new("m", 1000, 1080);
        let selection = vec![column("a", 600), column("b", 300), column("c", 200)];

        let layout = compose_layout(&selection, &canvas);

        assert_eq!(layout.placements.len(), 2);
        assert!((layout.total_width - 920.0).abs() < EPSILON);
        assert!(layout.total_width <= 1000.0);
    }

    // Tests a single image is kept even when it alone is as wide as the canvas
    // Verified by trimming while the row has one image left
    #[test]
    fn test_compose_keeps_single_image() {
        let canvas = CanvasSpec::new("m", 1000, 1080);
        let selection = vec![ImageDescriptor::new("panorama", 10_000, 1000)];

        let layout = compose_layout(&selection, &canvas);

        assert_eq!(layout.placements.len(), 1);
        assert_eq!(layout.placements.first().map(|p| p.x_offset), Some(0));
    }

    // Tests placements never leave the canvas for a range of rows
    // Verified by starting the row at the canvas centre
    #[test]
    fn test_compose_right_edge_within_canvas() {
        let canvas = CanvasSpec::new("m", 1366, 768).with_border(7);
        let selection: Vec<ImageDescriptor> = (0..6)
            .map(|i| ImageDescriptor::new(format!("img{i}"), 137 + i * 31, 768 + i * 17))
            .collect();

        let layout = compose_layout(&selection, &canvas);

        for placed in &layout.placements {
            assert!(placed.right_edge() <= 1366.0 + EPSILON);
            assert!(f64::from(placed.y_offset) + placed.scaled_height <= 768.0 + EPSILON);
        }
    }

    // Tests fractional widths never make neighbouring pixels overlap
    // Verified by rounding pixel widths to the nearest pixel
    #[test]
    fn test_compose_pixel_widths_do_not_overlap() {
        // 503x5400 scales to 100.6 wide on a 1080 high canvas
        let selection: Vec<ImageDescriptor> = (0..5)
            .map(|i| ImageDescriptor::new(format!("img{i}"), 503, 5400))
            .collect();

        for border in [0, 1, 7, 20] {
            let canvas = CanvasSpec::new("m", 1000, 1080).with_border(border);
            let layout = compose_layout(&selection, &canvas);
            assert_eq!(layout.placements.len(), 5);

            for pair in layout.placements.windows(2) {
                let (Some(left), Some(right)) = (pair.first(), pair.get(1)) else {
                    continue;
                };
                let (width, _) = left.pixel_size();
                assert!(
                    left.x_offset + width + border <= right.x_offset,
                    "border {border}: {} + {width} overlaps {}",
                    left.x_offset,
                    right.x_offset
                );
            }

            let last = layout.placements.last().map_or(0, |p| p.x_offset + p.pixel_size().0);
            assert!(last <= 1000);
        }
    }

    // Tests pixel sizes stay within one pixel of the scaled size
    // Verified by using the right cursor edge as the pixel width
    #[test]
    fn test_compose_pixel_size_tracks_scaled_size() {
        let canvas = CanvasSpec::new("m", 1366, 768).with_border(3);
        let selection: Vec<ImageDescriptor> = (0..4)
            .map(|i| ImageDescriptor::new(format!("img{i}"), 311 + i * 13, 997))
            .collect();

        let layout = compose_layout(&selection, &canvas);

        for placed in &layout.placements {
            let (width, height) = placed.pixel_size();
            assert!((f64::from(width) - placed.scaled_width).abs() < 1.0);
            assert!((f64::from(height) - placed.scaled_height).abs() < 1.0);
            assert!(placed.y_offset + height <= 768);
        }
    }
}
