use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Write the periodic 5-point Laplacian of `f` into `out`.
///
/// Neighbours past an edge wrap to the opposite edge, so a field that is
/// constant along an axis contributes nothing along that axis.
pub fn laplacian_wrap_into(f: &ImageF32, out: &mut ImageF32) {
    debug_assert!(f.same_shape(out));
    let (w, h) = (f.w, f.h);
    if w == 0 || h == 0 {
        return;
    }
    for y in 0..h {
        let up = f.row((y + h - 1) % h);
        let mid = f.row(y);
        let down = f.row((y + 1) % h);
        let dst = out.row_mut(y);
        for x in 0..w {
            let left = mid[(x + w - 1) % w];
            let right = mid[(x + 1) % w];
            dst[x] = left + right + up[x] + down[x] - 4.0 * mid[x];
        }
    }
}

/// Periodic 5-point Laplacian of `f`.
pub fn laplacian_wrap(f: &ImageF32) -> ImageF32 {
    let mut out = ImageF32::new(f.w, f.h);
    laplacian_wrap_into(f, &mut out);
    out
}
