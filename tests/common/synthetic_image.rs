use bubble_tracker::image::GrayImageU8;

/// Textured background: 40 plus a ripple that stays below the subtraction threshold.
pub fn background_u8(width: usize, height: usize) -> GrayImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = 40 + ((x * 7 + y * 3) % 10) as u8;
        }
    }
    GrayImageU8::new(width, height, img)
}

/// Background with a bright disk of radius `r` centred at `(cx, cy)`.
pub fn bubble_frame(width: usize, height: usize, cx: f32, cy: f32, r: f32) -> GrayImageU8 {
    let mut img = background_u8(width, height).into_raw();
    for y in 0..height {
        for x in 0..width {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            if dx * dx + dy * dy <= r * r {
                img[y * width + x] += 120;
            }
        }
    }
    GrayImageU8::new(width, height, img)
}
