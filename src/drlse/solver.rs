use super::boundary::neumann_bound_in_place;
use super::dirac::dirac;
use super::edge_indicator::EdgeIndicator;
use super::params::{EvolutionParams, Potential};
use super::workspace::Workspace;
use crate::error::{Error, Result};
use crate::image::ImageF32;
use log::{debug, warn};

/// Level-set evolution driver holding validated parameters.
#[derive(Clone, Debug)]
pub struct DrlseSolver {
    params: EvolutionParams,
}

impl DrlseSolver {
    /// Validate `params`. An unstable `mu` is logged, not rejected.
    pub fn new(params: EvolutionParams) -> Result<Self> {
        params.validate()?;
        if !params.is_stable() {
            warn!(
                "DRLSE: mu={} violates mu < 0.25/tau = {:.4}; the level set may diverge",
                params.mu,
                params.mu_limit()
            );
        }
        Ok(Self { params })
    }

    pub fn params(&self) -> &EvolutionParams {
        &self.params
    }

    /// Run `iterations` steps with area weight `alpha` from `phi0`.
    pub fn step(
        &self,
        phi0: &ImageF32,
        g: &EdgeIndicator,
        iterations: usize,
        alpha: f32,
    ) -> Result<ImageF32> {
        let mut phi = phi0.clone();
        let mut ws = prepare(&phi, g)?;
        run(&mut phi, g, &self.params, alpha, iterations, 0, &mut ws)?;
        Ok(phi)
    }

    /// Main evolution: `outer × inner` iterations with the configured `alpha`.
    pub fn evolve(&self, phi0: &ImageF32, g: &EdgeIndicator) -> Result<ImageF32> {
        let p = &self.params;
        let mut phi = phi0.clone();
        let mut ws = prepare(&phi, g)?;
        for outer in 0..p.outer_iterations {
            let done = outer * p.inner_iterations;
            run(&mut phi, g, p, p.alpha, p.inner_iterations, done, &mut ws)?;
            debug!(
                "DRLSE: outer step {}/{} done (max |phi| = {:.3})",
                outer + 1,
                p.outer_iterations,
                phi.max_abs()
            );
        }
        Ok(phi)
    }

    /// Edge-only refinement with `alpha = 0`.
    pub fn refine(&self, phi: &ImageF32, g: &EdgeIndicator) -> Result<ImageF32> {
        self.step(phi, g, self.params.refine_iterations, 0.0)
    }

    /// [`Self::evolve`] followed by [`Self::refine`].
    pub fn segment(&self, phi0: &ImageF32, g: &EdgeIndicator) -> Result<ImageF32> {
        let evolved = self.evolve(phi0, g)?;
        self.refine(&evolved, g)
    }
}

/// One-shot evolution with every weight passed explicitly:
/// `iterations` steps of the update with area weight `alpha`.
///
/// Runs without a divergence guard; use [`DrlseSolver`] for guarded,
/// configured runs.
#[allow(clippy::too_many_arguments)]
pub fn drlse_edge(
    phi0: &ImageF32,
    g: &EdgeIndicator,
    lambda: f32,
    mu: f32,
    epsilon: f32,
    timestep: f32,
    iterations: usize,
    potential: Potential,
    alpha: f32,
) -> Result<ImageF32> {
    let params = EvolutionParams::default()
        .with_timestep(timestep)
        .with_weights(mu, lambda, alpha)
        .with_epsilon(epsilon)
        .with_potential(potential)
        .with_divergence_bound(None);
    params.validate()?;
    let mut phi = phi0.clone();
    let mut ws = prepare(&phi, g)?;
    run(&mut phi, g, &params, alpha, iterations, 0, &mut ws)?;
    Ok(phi)
}

fn prepare(phi: &ImageF32, g: &EdgeIndicator) -> Result<Workspace> {
    if phi.w < 3 || phi.h < 3 {
        return Err(Error::FieldTooSmall {
            width: phi.w,
            height: phi.h,
        });
    }
    if g.dims() != (phi.w, phi.h) {
        return Err(Error::ShapeMismatch {
            expected: (phi.w, phi.h),
            actual: g.dims(),
        });
    }
    Ok(Workspace::new(phi.w, phi.h))
}

fn run(
    phi: &mut ImageF32,
    g: &EdgeIndicator,
    p: &EvolutionParams,
    alpha: f32,
    iterations: usize,
    offset: usize,
    ws: &mut Workspace,
) -> Result<()> {
    let (vx, vy) = (&g.gradient().gx.data, &g.gradient().gy.data);
    let g = &g.g().data;
    for it in 0..iterations {
        neumann_bound_in_place(phi)?;
        ws.compute_geometry(phi);
        ws.compute_regularization(phi, p.potential);

        for i in 0..phi.data.len() {
            let delta = dirac(phi.data[i], p.epsilon);
            let (nx, ny) = (ws.nx.data[i], ws.ny.data[i]);
            let area = delta * g[i];
            let edge = delta * (vx[i] * nx + vy[i] * ny) + delta * g[i] * ws.curvature.data[i];
            phi.data[i] +=
                p.timestep * (p.mu * ws.dist_reg.data[i] + p.lambda * edge + alpha * area);
        }

        if let Some(bound) = p.divergence_bound {
            let max_abs = phi.max_abs();
            if max_abs.is_nan() || max_abs > bound {
                return Err(Error::Diverged {
                    iteration: offset + it + 1,
                    max_abs,
                });
            }
        }
    }
    Ok(())
}
