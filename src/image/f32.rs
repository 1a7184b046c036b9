//! Owned single-channel f32 field in row-major layout (stride == width).
//!
//! Every scalar field of the solver (smoothed image, edge indicator, level-set
//! function and the intermediate derivative buffers) is an `ImageF32`.
use super::traits::{ImageView, ImageViewMut};
use super::u8::ImageU8;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Field width in samples
    pub w: usize,
    /// Field height in samples
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// Construct a buffer of size `w × h` holding `value` everywhere.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Construct a buffer by evaluating `f(x, y)` for every sample.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Promote an 8-bit view to floats, keeping the 0..255 scale.
    pub fn from_u8(gray: &ImageU8<'_>) -> Self {
        let mut out = ImageF32::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row(y);
            for (dst, &px) in out.row_mut(y).iter_mut().zip(src) {
                *dst = px as f32;
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the sample at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the sample at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn same_shape(&self, other: &ImageF32) -> bool {
        self.w == other.w && self.h == other.h
    }

    /// Apply `f` to every sample, producing a new field.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> ImageF32 {
        ImageF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two fields of equal shape sample by sample.
    ///
    /// Panics when the shapes differ; callers validate shapes up front.
    pub fn zip_map(&self, other: &ImageF32, f: impl Fn(f32, f32) -> f32) -> ImageF32 {
        assert!(
            self.same_shape(other),
            "zip_map on {}x{} and {}x{}",
            self.w,
            self.h,
            other.w,
            other.h
        );
        ImageF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Largest absolute sample; NaN if any sample is NaN.
    pub fn max_abs(&self) -> f32 {
        let mut best = 0.0f32;
        for &v in &self.data {
            if v.is_nan() {
                return f32::NAN;
            }
            best = best.max(v.abs());
        }
        best
    }

    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Copy rows `y0..y1` into a new field.
    pub fn crop_rows(&self, y0: usize, y1: usize) -> ImageF32 {
        let y1 = y1.min(self.h);
        let y0 = y0.min(y1);
        let mut out = ImageF32::new(self.w, y1 - y0);
        for (dst_y, src_y) in (y0..y1).enumerate() {
            out.row_mut(dst_y).copy_from_slice(self.row(src_y));
        }
        out
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        if self.stride == self.w {
            Some(&mut self.data[..self.w * self.h])
        } else {
            None
        }
    }
}
