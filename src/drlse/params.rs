use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Potential function of the distance-regularization term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Potential {
    /// `p1(s) = (s - 1)^2 / 2`: forces `|grad phi| = 1` everywhere.
    SingleWell,
    /// `p2`: wells at `s = 0` and `s = 1`, keeps flat regions flat.
    #[default]
    DoubleWell,
}

impl Potential {
    pub fn as_str(self) -> &'static str {
        match self {
            Potential::SingleWell => "single-well",
            Potential::DoubleWell => "double-well",
        }
    }
}

impl fmt::Display for Potential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Potential {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single-well" => Ok(Potential::SingleWell),
            "double-well" => Ok(Potential::DoubleWell),
            other => Err(Error::InvalidPotential(other.to_string())),
        }
    }
}

impl TryFrom<String> for Potential {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Potential> for String {
    fn from(value: Potential) -> Self {
        value.as_str().to_string()
    }
}

/// Weights, step and schedule of one level-set evolution.
///
/// Defaults reproduce the bubble rig settings: `tau = 2`, `mu = 0.2 / tau`,
/// `lambda = 10`, `alpha = 2`, `epsilon = 2`, 30 outer × 20 inner iterations
/// followed by 10 refinement iterations with the double-well potential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvolutionParams {
    /// Time step `tau`; reasonable values lie in `[0.1, 5]`.
    pub timestep: f32,
    /// Weight of the distance-regularization term; stable below `0.25 / tau`.
    pub mu: f32,
    /// Weight of the weighted length term.
    pub lambda: f32,
    /// Weight of the weighted area term. Positive shrinks, negative expands.
    pub alpha: f32,
    /// Width of the smoothed Dirac delta in pixels.
    pub epsilon: f32,
    /// Iterations per outer step.
    pub inner_iterations: usize,
    /// Outer steps of the main evolution.
    pub outer_iterations: usize,
    /// Iterations of the `alpha = 0` refinement pass.
    pub refine_iterations: usize,
    pub potential: Potential,
    /// Fail with `Error::Diverged` once `max |phi|` exceeds this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence_bound: Option<f32>,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        let timestep = 2.0;
        Self {
            timestep,
            mu: 0.2 / timestep,
            lambda: 10.0,
            alpha: 2.0,
            epsilon: 2.0,
            inner_iterations: 20,
            outer_iterations: 30,
            refine_iterations: 10,
            potential: Potential::DoubleWell,
            divergence_bound: None,
        }
    }
}

impl EvolutionParams {
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_weights(mut self, mu: f32, lambda: f32, alpha: f32) -> Self {
        self.mu = mu;
        self.lambda = lambda;
        self.alpha = alpha;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_iterations(mut self, outer: usize, inner: usize, refine: usize) -> Self {
        self.outer_iterations = outer;
        self.inner_iterations = inner;
        self.refine_iterations = refine;
        self
    }

    pub fn with_potential(mut self, potential: Potential) -> Self {
        self.potential = potential;
        self
    }

    pub fn with_divergence_bound(mut self, bound: Option<f32>) -> Self {
        self.divergence_bound = bound;
        self
    }

    /// Largest `mu` for which the regularization step is stable.
    pub fn mu_limit(&self) -> f32 {
        0.25 / self.timestep
    }

    /// `true` when `mu * tau < 0.25`.
    pub fn is_stable(&self) -> bool {
        self.mu < self.mu_limit()
    }

    /// Reject parameters the scheme cannot run with.
    ///
    /// An unstable `mu` is accepted here; it shows up as divergence instead.
    pub fn validate(&self) -> Result<()> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(Error::invalid("timestep", self.timestep, "must be positive and finite"));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::invalid("epsilon", self.epsilon, "must be positive and finite"));
        }
        if !self.mu.is_finite() || self.mu < 0.0 {
            return Err(Error::invalid("mu", self.mu, "must be non-negative and finite"));
        }
        if !self.lambda.is_finite() {
            return Err(Error::invalid("lambda", self.lambda, "must be finite"));
        }
        if !self.alpha.is_finite() {
            return Err(Error::invalid("alpha", self.alpha, "must be finite"));
        }
        if let Some(bound) = self.divergence_bound {
            if !(bound.is_finite() && bound > 0.0) {
                return Err(Error::invalid("divergence_bound", bound, "must be positive and finite"));
            }
        }
        Ok(())
    }
}
