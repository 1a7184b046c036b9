//! Binary foreground/background masks.
//!
//! A mask is produced once per frame by thresholding the evolved level-set
//! function at zero and is then consumed by the contour tracer, the bubble
//! selector and the volume estimator.
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Inclusive pixel bounds of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelBounds {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl PixelBounds {
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        }
    }

    pub fn include(&mut self, x: usize, y: usize) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }

    pub fn width(&self) -> usize {
        self.x_max - self.x_min + 1
    }

    pub fn height(&self) -> usize {
        self.y_max - self.y_min + 1
    }
}

/// Row-major boolean mask; `true` marks foreground.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    pub w: usize,
    pub h: usize,
    data: Vec<bool>,
}

impl BinaryMask {
    /// All-background mask.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    /// Threshold a level-set function: samples `<= 0` (inside) are foreground.
    pub fn from_level_set(phi: &ImageF32) -> Self {
        Self {
            w: phi.w,
            h: phi.h,
            data: phi.data.iter().map(|&v| v <= 0.0).collect(),
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.data[y * self.w + x] = value;
    }

    /// Signed lookup; anything outside the mask is background.
    #[inline]
    pub fn get_signed(&self, x: isize, y: isize) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.w
            && (y as usize) < self.h
            && self.data[y as usize * self.w + x as usize]
    }

    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&v| v)
    }

    /// Foreground pixel count of every row.
    pub fn row_counts(&self) -> Vec<usize> {
        self.rows()
            .map(|row| row.iter().filter(|&&v| v).count())
            .collect()
    }

    /// Bounds of all foreground pixels, `None` for an empty mask.
    pub fn bounds(&self) -> Option<PixelBounds> {
        let mut bounds: Option<PixelBounds> = None;
        for (y, row) in self.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if !v {
                    continue;
                }
                match bounds.as_mut() {
                    Some(b) => b.include(x, y),
                    None => bounds = Some(PixelBounds::at(x, y)),
                }
            }
        }
        bounds
    }

    /// Copy keeping only foreground pixels inside `bounds`.
    pub fn cropped_to(&self, bounds: &PixelBounds) -> BinaryMask {
        BinaryMask::from_fn(self.w, self.h, |x, y| {
            bounds.contains(x, y) && self.get(x, y)
        })
    }

    /// 0/255 grayscale rendition for persistence.
    pub fn to_gray(&self) -> GrayImageU8 {
        let data = self.data.iter().map(|&v| if v { 255 } else { 0 }).collect();
        GrayImageU8::new(self.w, self.h, data)
    }
}

impl ImageView for BinaryMask {
    type Pixel = bool;

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
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [bool] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [bool]> {
        Some(&mut self.data)
    }
}
