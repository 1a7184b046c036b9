//! Distance-Regularized Level Set Evolution (DRLSE) for edge-based segmentation.
//!
//! Implements the edge-based active contour of Li, Xu, Gui and Fox (IEEE TIP
//! 19(12), 2010). A level-set function `phi` (negative inside, positive
//! outside) is advanced with an explicit finite-difference scheme:
//!
//! ```text
//! phi <- phi + tau * (mu * R(phi) + lambda * L(phi) + alpha * A(phi))
//! ```
//!
//! - `R`: distance regularization, single-well or double-well potential
//!   ([`regularization`]).
//! - `L`: weighted length term pulling the zero level set onto strong edges of
//!   the edge indicator `g`, `delta(phi) * (grad g . N + g * curvature)`.
//! - `A`: weighted area (balloon) term `delta(phi) * g`; positive `alpha`
//!   shrinks the contour, negative `alpha` expands it.
//! - `delta`: smoothed Dirac delta of width `epsilon` ([`dirac`]).
//!
//! Before every iteration the border of `phi` is mirrored from offset 2
//! ([`boundary`]) so no artificial flux enters through the image edge.
//!
//! Stability: the regularization term is stable for `mu < 0.25 / tau`. The
//! solver does not detect non-convergence; an optional divergence bound turns
//! runaway growth into [`crate::Error::Diverged`].
//!
//! Usage is two-phase: [`DrlseSolver::evolve`] runs `outer × inner`
//! iterations with the configured `alpha`, then [`DrlseSolver::refine`] runs
//! a short pass with `alpha = 0` to settle the contour on the edges.
//! [`DrlseSolver::segment`] does both.

pub mod boundary;
pub mod dirac;
mod edge_indicator;
mod params;
pub mod regularization;
mod solver;
mod workspace;

pub use boundary::{neumann_bound, neumann_bound_in_place};
pub use dirac::{dirac, dirac_field};
pub use edge_indicator::EdgeIndicator;
pub use params::{EvolutionParams, Potential};
pub use regularization::{curvature, distance_regularization};
pub use solver::{drlse_edge, DrlseSolver};

#[cfg(test)]
mod tests;
