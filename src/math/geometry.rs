/// Dimensions of an image after uniform fit-to-box scaling
///
/// The ratio is `min(box_w / img_w, box_h / img_h)`, so the result always fits
/// inside the box and keeps the image's aspect ratio. The constraining side is
/// returned exactly equal to the box side, which keeps width checks against the
/// canvas free of rounding drift. Zero-sized images or boxes yield `(0.0, 0.0)`.
pub fn scaled_dimensions(img_w: u32, img_h: u32, box_w: u32, box_h: u32) -> (f64, f64) {
    if img_w == 0 || img_h == 0 || box_w == 0 || box_h == 0 {
        return (0.0, 0.0);
    }

    let ratio_w = f64::from(box_w) / f64::from(img_w);
    let ratio_h = f64::from(box_h) / f64::from(img_h);

    if ratio_w <= ratio_h {
        // Width constrains
        let height = (f64::from(img_h) * ratio_w).min(f64::from(box_h));
        (f64::from(box_w), height)
    } else {
        let width = (f64::from(img_w) * ratio_h).min(f64::from(box_w));
        (width, f64::from(box_h))
    }
}

/// Width component of [`scaled_dimensions`]
pub fn scaled_width(img_w: u32, img_h: u32, box_w: u32, box_h: u32) -> f64 {
    scaled_dimensions(img_w, img_h, box_w, box_h).0
}

/// Total width of a row of images separated by `border` pixels
///
/// An empty row has zero width; a single image contributes no border.
pub fn packed_width<I>(widths: I, border: u32) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    let mut count = 0_usize;
    for width in widths {
        total += width;
        count += 1;
    }

    if count > 1 {
        total += f64::from(border) * (count - 1) as f64;
    }
    total
}
