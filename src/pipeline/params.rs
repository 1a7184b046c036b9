use crate::drlse::EvolutionParams;
use crate::error::{Error, Result};
use crate::measure::DEFAULT_SCALE_FACTOR;
use crate::physics::FluidProperties;
use crate::preprocess::{CropWindow, FlowArea, InitialLevelSet, PreprocessParams};
use crate::tracking::SelectorParams;
use serde::{Deserialize, Serialize};

/// Parameters shared by every frame of every recording.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessingParams {
    pub evolution: EvolutionParams,
    pub preprocess: PreprocessParams,
    pub selector: SelectorParams,
    pub initial_level_set: InitialLevelSet,
    /// Millimetres per pixel.
    pub scale_factor: f64,
    pub fluid: FluidProperties,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            evolution: EvolutionParams::default(),
            preprocess: PreprocessParams::default(),
            selector: SelectorParams::default(),
            initial_level_set: InitialLevelSet::default(),
            scale_factor: DEFAULT_SCALE_FACTOR,
            fluid: FluidProperties::default(),
        }
    }
}

impl ProcessingParams {
    pub fn validate(&self) -> Result<()> {
        self.evolution.validate()?;
        self.preprocess.validate()?;
        self.initial_level_set.validate()?;
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(Error::invalid(
                "scale_factor",
                self.scale_factor,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Per-recording geometry: which rows to keep and where the flow channel is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    pub crop: CropWindow,
    pub flow_area: FlowArea,
}

impl FrameContext {
    pub fn new(crop: CropWindow, flow_area: FlowArea) -> Self {
        Self { crop, flow_area }
    }

    /// Context with the crop window of a nozzle diameter (mm).
    pub fn for_nozzle(diameter_mm: f64, flow_area: FlowArea) -> Self {
        Self::new(CropWindow::for_nozzle(diameter_mm), flow_area)
    }
}
