//! Finite-difference operators on scalar fields.
//!
//! - [`gradient`]: per-axis derivatives with central differences in the
//!   interior and one-sided differences on the first/last sample of each axis.
//! - [`divergence`]: `∂nx/∂x + ∂ny/∂y` of a vector field with the same scheme.
//! - [`laplacian_wrap`]: 5-point Laplacian with periodic (wrap-around) indexing.
//!
//! The `_into` variants write into caller-owned buffers so the level-set
//! solver can run its inner loop without reallocating. Non-finite samples are
//! not validated and simply propagate.
//!
//! Complexity: O(W·H) per operator.

mod gradient;
mod laplacian;

pub use gradient::{
    d_dx_into, d_dy_into, divergence, divergence_into, gradient, gradient_into, Gradient,
};
pub use laplacian::{laplacian_wrap, laplacian_wrap_into};
