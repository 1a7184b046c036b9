//! Smoothed Dirac delta of width `epsilon`.
use crate::image::ImageF32;
use std::f32::consts::PI;

/// `(1 / (2 eps)) * (1 + cos(pi x / eps))` for `|x| <= eps`, zero elsewhere.
#[inline]
pub fn dirac(x: f32, epsilon: f32) -> f32 {
    if x.abs() <= epsilon {
        (1.0 + (PI * x / epsilon).cos()) / (2.0 * epsilon)
    } else {
        0.0
    }
}

/// Sample-wise [`dirac`] of a field.
pub fn dirac_field(x: &ImageF32, epsilon: f32) -> ImageF32 {
    x.map(|v| dirac(v, epsilon))
}
