//! Tests for painting layouts and writing canvases as JPEG

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use mosaicwall::WallError;
    use mosaicwall::io::raster::{output_file_name, paint_canvas, render_canvas, short_id};
    use mosaicwall::spatial::canvas::CanvasSpec;
    use mosaicwall::spatial::descriptor::ImageDescriptor;
    use mosaicwall::spatial::layout::compose_layout;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::Path;
    use tempfile::TempDir;

    const RED: [u8; 3] = [220, 20, 20];
    const BLUE: [u8; 3] = [0, 0, 255];

    fn write_source(dir: &Path) -> ImageDescriptor {
        let path = dir.join("red.png");
        RgbImage::from_pixel(40, 20, Rgb(RED))
            .save(&path)
            .expect("write source image");
        ImageDescriptor::new(path, 40, 20)
    }

    fn close(pixel: &Rgb<u8>, expected: [u8; 3]) -> bool {
        pixel
            .0
            .iter()
            .zip(expected)
            .all(|(&a, b)| a.abs_diff(b) <= 3)
    }

    // Tests the placed image covers its slot and the rest keeps the background
    // Verified by overlaying at the origin instead of the placement offsets
    #[test]
    fn test_paint_canvas_places_image() {
        let dir = TempDir::new().expect("tempdir");
        let image = write_source(dir.path());
        let canvas = CanvasSpec::new("test", 100, 60).with_border(0);
        let layout = compose_layout(&[image], &canvas);

        let painted = paint_canvas(&layout, &canvas, BLUE).expect("paint");

        assert_eq!(painted.dimensions(), (100, 60));
        assert!(close(painted.get_pixel(50, 30), RED));
        assert!(close(painted.get_pixel(50, 2), BLUE));
        assert!(close(painted.get_pixel(50, 57), BLUE));
    }

    // Tests an empty layout yields a plain background canvas
    // Verified by filling the canvas with the default colour
    #[test]
    fn test_paint_empty_layout() {
        let canvas = CanvasSpec::new("test", 10, 10);
        let layout = compose_layout(&[], &canvas);

        let painted = paint_canvas(&layout, &canvas, BLUE).expect("paint");
        assert!(painted.pixels().all(|pixel| pixel.0 == BLUE));
    }

    // Tests a vanished source image is reported with its path
    // Verified by skipping placements that fail to decode
    #[test]
    fn test_paint_missing_source() {
        let canvas = CanvasSpec::new("test", 100, 60);
        let missing = ImageDescriptor::new("/nonexistent/gone.png", 40, 20);
        let layout = compose_layout(&[missing], &canvas);

        assert!(matches!(
            paint_canvas(&layout, &canvas, BLUE),
            Err(WallError::ImageLoad { .. })
        ));
    }

    // Tests rendering writes a readable JPEG of canvas size
    // Verified by saving the resized source instead of the canvas
    #[test]
    fn test_render_canvas_writes_jpeg() {
        let dir = TempDir::new().expect("tempdir");
        let image = write_source(dir.path());
        let canvas = CanvasSpec::new("test", 100, 60);
        let layout = compose_layout(&[image], &canvas);
        let output_dir = dir.path().join("out").join(canvas.directory_name());
        let mut rng = StdRng::seed_from_u64(3);

        let path = render_canvas(&layout, &canvas, [0, 0, 0], &output_dir, &mut rng)
            .expect("render");

        assert_eq!(path.parent(), Some(output_dir.as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));
        assert_eq!(
            image::image_dimensions(&path).expect("read back"),
            (100, 60)
        );
    }

    // Tests file names carry height, width and a short id
    // Verified by writing width before height
    #[test]
    fn test_output_file_name_format() {
        let mut rng = StdRng::seed_from_u64(11);
        let name = output_file_name(&CanvasSpec::new("DP-1", 2560, 1440), &mut rng);

        let stem = name.strip_suffix(".jpg").expect("jpg extension");
        let parts: Vec<_> = stem.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "1440");
        assert_eq!(parts[1], "2560");
        assert_eq!(parts[2].len(), 8);
    }

    // Tests short ids are lowercase hex and seed-reproducible
    // Verified by drawing digits from 0..36
    #[test]
    fn test_short_id() {
        let first = short_id(&mut StdRng::seed_from_u64(5));
        let second = short_id(&mut StdRng::seed_from_u64(5));

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
