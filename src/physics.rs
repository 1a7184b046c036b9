//! Dimensionless numbers characterising a rising bubble.
use serde::{Deserialize, Serialize};

/// Fluid properties, SI units. Defaults describe water at room temperature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FluidProperties {
    /// Liquid/gas density difference (kg/m³).
    pub density_difference: f64,
    /// Liquid density (kg/m³).
    pub density: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Surface tension (N/m).
    pub surface_tension: f64,
    /// Dynamic viscosity (Pa·s).
    pub viscosity: f64,
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self {
            density_difference: 997.0,
            density: 998.0,
            gravity: 9.8,
            surface_tension: 7.6e-2,
            viscosity: 8.9e-4,
        }
    }
}

impl FluidProperties {
    /// Eötvös (Bond) number `Δρ g d² / σ` for an equivalent radius in metres.
    pub fn eotvos(&self, radius_m: f64) -> f64 {
        let d = 2.0 * radius_m;
        self.density_difference * self.gravity * d * d / self.surface_tension
    }

    /// Reynolds number `ρ v d / μ`.
    ///
    /// `velocity_px` is in pixels per second and `scale` in mm per pixel.
    pub fn reynolds(&self, velocity_px: f64, scale: f64, radius_m: f64) -> f64 {
        let velocity = velocity_px * scale * 1e-3;
        self.density * velocity * 2.0 * radius_m / self.viscosity
    }
}
