//! Distance-regularization term `R(phi)` of the DRLSE energy.
//!
//! - single-well: `laplacian(phi) - curvature(phi)`
//! - double-well: `div(d_p(|grad phi|) * grad phi - grad phi) + laplacian(phi)`
//!
//! The Laplacian wraps around the field edges while the gradients use
//! one-sided differences there.
use super::params::Potential;
use super::workspace::Workspace;
use crate::image::ImageF32;
use std::f32::consts::PI;

/// First derivative of the double-well potential `p2`.
#[inline]
pub fn double_well_derivative(s: f32) -> f32 {
    if s <= 1.0 {
        (2.0 * PI * s).sin() / (2.0 * PI)
    } else {
        s - 1.0
    }
}

/// `d_p(s) = p2'(s) / s`, with the limit `d_p(0) = 1`.
#[inline]
pub fn dp_ratio(s: f32) -> f32 {
    if s == 0.0 {
        1.0
    } else {
        double_well_derivative(s) / s
    }
}

/// Curvature `div(grad phi / |grad phi|)` of the level sets of `phi`.
pub fn curvature(phi: &ImageF32) -> ImageF32 {
    let mut ws = Workspace::new(phi.w, phi.h);
    ws.compute_geometry(phi);
    ws.curvature
}

/// Distance-regularization term of `phi` for the given potential.
pub fn distance_regularization(phi: &ImageF32, potential: Potential) -> ImageF32 {
    let mut ws = Workspace::new(phi.w, phi.h);
    ws.compute_geometry(phi);
    ws.compute_regularization(phi, potential);
    ws.dist_reg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_one_at_zero_and_continuous_near_it() {
        assert_eq!(dp_ratio(0.0), 1.0);
        assert!((dp_ratio(1e-4) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn derivative_vanishes_at_both_wells() {
        assert!(double_well_derivative(0.0).abs() < 1e-7);
        assert!(double_well_derivative(1.0).abs() < 1e-6);
        assert!((double_well_derivative(3.0) - 2.0).abs() < 1e-7);
    }
}
