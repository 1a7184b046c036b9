use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Per-axis derivatives of a scalar field.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Derivative along x (columns)
    pub gx: ImageF32,
    /// Derivative along y (rows)
    pub gy: ImageF32,
}

impl Gradient {
    /// `gx^2 + gy^2` per sample.
    pub fn magnitude_sq(&self) -> ImageF32 {
        self.gx.zip_map(&self.gy, |a, b| a * a + b * b)
    }
}

/// Derivative of `row` at `i`: central inside, one-sided at the ends.
#[inline]
fn diff_1d(prev: f32, next: f32, i: usize, len: usize) -> f32 {
    if len < 2 {
        0.0
    } else if i == 0 || i == len - 1 {
        next - prev
    } else {
        0.5 * (next - prev)
    }
}

#[inline]
fn neighbours(i: usize, len: usize) -> (usize, usize) {
    if len < 2 {
        (i, i)
    } else if i == 0 {
        (0, 1)
    } else if i == len - 1 {
        (len - 2, len - 1)
    } else {
        (i - 1, i + 1)
    }
}

/// Write `∂f/∂x` into `out` (same shape as `f`).
pub fn d_dx_into(f: &ImageF32, out: &mut ImageF32) {
    debug_assert!(f.same_shape(out));
    let w = f.w;
    for y in 0..f.h {
        let src = f.row(y);
        let dst = out.row_mut(y);
        for (x, d) in dst.iter_mut().enumerate() {
            let (a, b) = neighbours(x, w);
            *d = diff_1d(src[a], src[b], x, w);
        }
    }
}

/// Write `∂f/∂y` into `out` (same shape as `f`).
pub fn d_dy_into(f: &ImageF32, out: &mut ImageF32) {
    debug_assert!(f.same_shape(out));
    let h = f.h;
    for y in 0..h {
        let (a, b) = neighbours(y, h);
        let (row_a, row_b) = (f.row(a), f.row(b));
        let dst = out.row_mut(y);
        for x in 0..f.w {
            dst[x] = diff_1d(row_a[x], row_b[x], y, h);
        }
    }
}

/// Write both derivatives of `f` into `gx` and `gy`.
pub fn gradient_into(f: &ImageF32, gx: &mut ImageF32, gy: &mut ImageF32) {
    d_dx_into(f, gx);
    d_dy_into(f, gy);
}

/// Compute both derivatives of `f`.
pub fn gradient(f: &ImageF32) -> Gradient {
    let mut gx = ImageF32::new(f.w, f.h);
    let mut gy = ImageF32::new(f.w, f.h);
    gradient_into(f, &mut gx, &mut gy);
    Gradient { gx, gy }
}

/// Write `∂nx/∂x + ∂ny/∂y` into `out`.
pub fn divergence_into(nx: &ImageF32, ny: &ImageF32, out: &mut ImageF32) {
    debug_assert!(nx.same_shape(ny) && nx.same_shape(out));
    let (w, h) = (nx.w, nx.h);
    for y in 0..h {
        let (ya, yb) = neighbours(y, h);
        let row_x = nx.row(y);
        let (row_a, row_b) = (ny.row(ya), ny.row(yb));
        let dst = out.row_mut(y);
        for x in 0..w {
            let (xa, xb) = neighbours(x, w);
            dst[x] = diff_1d(row_x[xa], row_x[xb], x, w) + diff_1d(row_a[x], row_b[x], y, h);
        }
    }
}

/// Divergence of the vector field `(nx, ny)`.
pub fn divergence(nx: &ImageF32, ny: &ImageF32) -> ImageF32 {
    let mut out = ImageF32::new(nx.w, nx.h);
    divergence_into(nx, ny, &mut out);
    out
}
