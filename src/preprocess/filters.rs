use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Separable 1D filter applied along rows, then columns.
pub trait SeparableFilter {
    /// The 1D taps in left-to-right order; odd length, centred.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Normalised binomial kernel `[1, 4, 6, 4, 1] / 16`, the 5-tap Gaussian used
/// when no positive sigma is given.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Sampled, normalised 5-tap Gaussian.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: [f32; 5],
}

impl GaussianKernel {
    /// Kernel for standard deviation `sigma`; `sigma <= 0` gives [`GAUSSIAN_5TAP`].
    pub fn new(sigma: f32) -> Self {
        if sigma.is_nan() || sigma <= 0.0 {
            return Self {
                taps: GAUSSIAN_5TAP,
            };
        }
        let mut taps = [0.0f32; 5];
        let denom = 2.0 * sigma * sigma;
        for (i, t) in taps.iter_mut().enumerate() {
            let d = i as f32 - 2.0;
            *t = (-d * d / denom).exp();
        }
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Blur with a 5-tap Gaussian of the given sigma.
pub fn gaussian_blur(src: &ImageF32, sigma: f32) -> ImageF32 {
    convolve_separable(src, &GaussianKernel::new(sigma))
}

/// Convolve with `filter` along both axes, mirroring borders without
/// repeating the edge sample (`dcb|abcd|cba`).
pub fn convolve_separable<F: SeparableFilter>(src: &ImageF32, filter: &F) -> ImageF32 {
    if src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let taps = filter.taps();
    let radius = filter.radius() as isize;

    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let row = src.row(y);
        for (x, dst) in horiz.row_mut(y).iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, src.w);
                acc += tap * row[sx];
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let dst_row = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - radius, src.h);
            for (dst, &v) in dst_row.iter_mut().zip(horiz.row(sy)) {
                *dst += tap * v;
            }
        }
    }
    out
}

fn reflect_101(idx: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    let mut i = idx;
    while i < 0 || i > last {
        i = if i < 0 { -i } else { 2 * last - i };
    }
    i as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalised_and_symmetric() {
        let k = GaussianKernel::new(0.7);
        let sum: f32 = k.taps().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(k.taps()[0], k.taps()[4]);
        assert!(k.taps()[2] > 0.5, "centre tap {}", k.taps()[2]);
        assert_eq!(GaussianKernel::new(0.0).taps(), &GAUSSIAN_5TAP);
    }

    #[test]
    fn reflect_101_borders() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(-2, 2), 0);
        assert_eq!(reflect_101(3, 1), 0);
    }

    #[test]
    fn blur_preserves_constants_and_spreads_impulses() {
        let flat = ImageF32::filled(7, 6, 40.0);
        let blurred = gaussian_blur(&flat, 0.7);
        assert!(blurred.data.iter().all(|&v| (v - 40.0).abs() < 1e-4));

        let mut impulse = ImageF32::new(9, 9);
        impulse.set(4, 4, 100.0);
        let blurred = gaussian_blur(&impulse, 0.0);
        assert!((blurred.get(4, 4) - 100.0 * 0.375 * 0.375).abs() < 1e-4);
        assert!(blurred.get(2, 4) > 0.0);
        assert_eq!(blurred.get(1, 4), 0.0);
        let total: f32 = blurred.data.iter().sum();
        assert!((total - 100.0).abs() < 1e-3);
    }
}
