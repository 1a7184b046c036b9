//! Scratch buffers reused across solver iterations.
//!
//! One workspace lives for the duration of a solver call; each iteration
//! overwrites every buffer before reading it, so no state leaks between
//! iterations.
use super::params::Potential;
use super::regularization::dp_ratio;
use crate::field::{divergence_into, gradient_into, laplacian_wrap_into};
use crate::image::ImageF32;

const SMALL_NUMBER: f32 = 1e-10;

pub(crate) struct Workspace {
    /// `d phi / dx`
    pub phi_x: ImageF32,
    /// `d phi / dy`
    pub phi_y: ImageF32,
    /// Unit normal, x component
    pub nx: ImageF32,
    /// Unit normal, y component
    pub ny: ImageF32,
    pub curvature: ImageF32,
    pub laplacian: ImageF32,
    pub dist_reg: ImageF32,
    flux_x: ImageF32,
    flux_y: ImageF32,
}

impl Workspace {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            phi_x: ImageF32::new(w, h),
            phi_y: ImageF32::new(w, h),
            nx: ImageF32::new(w, h),
            ny: ImageF32::new(w, h),
            curvature: ImageF32::new(w, h),
            laplacian: ImageF32::new(w, h),
            dist_reg: ImageF32::new(w, h),
            flux_x: ImageF32::new(w, h),
            flux_y: ImageF32::new(w, h),
        }
    }

    /// Gradient, unit normal `grad phi / (|grad phi| + 1e-10)` and its divergence.
    pub fn compute_geometry(&mut self, phi: &ImageF32) {
        gradient_into(phi, &mut self.phi_x, &mut self.phi_y);
        let normals = self.nx.data.iter_mut().zip(self.ny.data.iter_mut());
        for ((nx, ny), (&px, &py)) in normals.zip(self.phi_x.data.iter().zip(&self.phi_y.data)) {
            let s = (px * px + py * py).sqrt() + SMALL_NUMBER;
            *nx = px / s;
            *ny = py / s;
        }
        divergence_into(&self.nx, &self.ny, &mut self.curvature);
    }

    /// Distance-regularization term; requires [`Self::compute_geometry`] first.
    pub fn compute_regularization(&mut self, phi: &ImageF32, potential: Potential) {
        laplacian_wrap_into(phi, &mut self.laplacian);
        match potential {
            Potential::SingleWell => {
                let terms = self.laplacian.data.iter().zip(&self.curvature.data);
                for (out, (&lap, &curv)) in self.dist_reg.data.iter_mut().zip(terms) {
                    *out = lap - curv;
                }
            }
            Potential::DoubleWell => {
                let fluxes = self.flux_x.data.iter_mut().zip(self.flux_y.data.iter_mut());
                let grads = self.phi_x.data.iter().zip(&self.phi_y.data);
                for ((fx, fy), (&px, &py)) in fluxes.zip(grads) {
                    let dps = dp_ratio((px * px + py * py).sqrt());
                    *fx = dps * px - px;
                    *fy = dps * py - py;
                }
                divergence_into(&self.flux_x, &self.flux_y, &mut self.dist_reg);
                for (out, &lap) in self.dist_reg.data.iter_mut().zip(&self.laplacian.data) {
                    *out += lap;
                }
            }
        }
    }
}
