use crate::pipeline::{FrameContext, ProcessingParams};
use crate::preprocess::{CropWindow, FlowArea};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One recording: a background frame plus a directory of frames.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetConfig {
    pub name: String,
    pub background: PathBuf,
    pub frames_dir: PathBuf,
    /// Nozzle diameter in millimetres; selects the default crop window.
    pub diameter_mm: f64,
    pub flow_area: FlowArea,
    /// Overrides the crop window derived from the diameter.
    #[serde(default)]
    pub crop: Option<CropWindow>,
    /// Masks and the report of this dataset go here.
    pub output_dir: PathBuf,
    /// Frames per second; enables rise velocities and Reynolds numbers.
    #[serde(default)]
    pub frame_rate: Option<f64>,
}

impl DatasetConfig {
    pub fn context(&self) -> FrameContext {
        FrameContext::new(
            self.crop
                .unwrap_or_else(|| CropWindow::for_nozzle(self.diameter_mm)),
            self.flow_area,
        )
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    /// File name of the per-dataset JSON report.
    pub report_name: String,
    /// Also write the final level-set function of every target frame.
    pub save_level_sets: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_name: "report.json".to_string(),
            save_level_sets: false,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentFramesConfig {
    #[serde(default)]
    pub params: ProcessingParams,
    #[serde(default)]
    pub output: OutputConfig,
    pub datasets: Vec<DatasetConfig>,
}

pub fn load_config(path: &Path) -> Result<SegmentFramesConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Invalid config {}: {e}", path.display()))
}

/// Parse and validate a configuration document.
pub fn parse_config(data: &str) -> Result<SegmentFramesConfig, String> {
    let config: SegmentFramesConfig =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse: {e}"))?;
    if config.datasets.is_empty() {
        return Err("no datasets configured".to_string());
    }
    config.params.validate().map_err(|e| e.to_string())?;
    if let Some(ds) = config
        .datasets
        .iter()
        .find(|ds| ds.frame_rate.is_some_and(|fps| !(fps.is_finite() && fps > 0.0)))
    {
        return Err(format!("dataset {}: frame rate must be positive", ds.name));
    }
    Ok(config)
}
