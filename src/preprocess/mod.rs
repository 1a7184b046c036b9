//! Frame preparation ahead of the level-set evolution.
//!
//! Each raw frame goes through the same fixed chain before the solver sees
//! it: background subtraction, crop to the rows of interest, then a clean-up
//! pass that keeps the flow channel only when it contains the bubble. The
//! initial level-set function is built here as well since it depends on the
//! cropped frame size only.

mod background;
mod clean;
mod crop;
mod filters;
mod init;

pub use background::subtract_background;
pub use clean::{clean_image, FlowArea};
pub use crop::CropWindow;
pub use filters::{gaussian_blur, GaussianKernel, SeparableFilter, GAUSSIAN_5TAP};
pub use init::{InitialLevelSet, SliceBounds};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the preparation chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreprocessParams {
    /// Gaussian standard deviation in pixels; `<= 0` selects the binomial kernel.
    pub sigma: f32,
    /// Differences below this are treated as background.
    pub subtract_threshold: u8,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            sigma: 0.7,
            subtract_threshold: 15,
        }
    }
}

impl PreprocessParams {
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() {
            return Err(Error::invalid("sigma", self.sigma, "must be finite"));
        }
        Ok(())
    }
}
