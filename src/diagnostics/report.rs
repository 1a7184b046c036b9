use super::summary::BubbleSummary;
use super::timing::TimingBreakdown;
use crate::mask::PixelBounds;
use crate::pipeline::{FrameOutcome, SkipReason};
use crate::tracking::BubbleTrackState;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameStatus {
    Skipped,
    NoTarget,
    Segmented,
}

/// Per-frame record written by the batch tool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    /// Position of the frame in its recording.
    pub ordinal: usize,
    pub frame: String,
    pub status: FrameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubble_index: Option<u32>,
    pub is_target_frame: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<PixelBounds>,
    pub contour_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_mm3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalent_radius_mm: Option<f64>,
    /// `[x, y]` in cropped-frame pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<TimingBreakdown>,
}

impl FrameReport {
    pub fn new(ordinal: usize, frame: impl Into<String>, outcome: &FrameOutcome) -> Self {
        let mut report = Self {
            ordinal,
            frame: frame.into(),
            status: FrameStatus::Skipped,
            bubble_index: None,
            is_target_frame: false,
            bounds: None,
            contour_points: 0,
            volume_mm3: None,
            equivalent_radius_mm: None,
            centroid: None,
            mask_file: None,
            timings: None,
        };
        match outcome {
            FrameOutcome::Skipped(SkipReason::EmptyFrame) => {}
            FrameOutcome::NoTarget => report.status = FrameStatus::NoTarget,
            FrameOutcome::Segmented(m) => {
                report.status = FrameStatus::Segmented;
                report.bubble_index = Some(m.bubble.bubble_index);
                report.is_target_frame = m.bubble.is_target_frame;
                report.bounds = Some(m.bubble.bounds);
                report.contour_points = m.bubble.contour.len();
                report.volume_mm3 = Some(m.volume_mm3);
                report.equivalent_radius_mm = Some(m.equivalent_radius_mm);
                report.centroid = m.centroid.map(|c| [c.x, c.y]);
                report.timings = Some(m.timings.clone());
            }
        }
        report
    }

    pub fn with_mask_file(mut self, name: impl Into<String>) -> Self {
        self.mask_file = Some(name.into());
        self
    }
}

/// Everything the batch tool records about one recording.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceReport {
    pub dataset: String,
    pub diameter_mm: f64,
    pub frame_count: usize,
    pub segmented: usize,
    pub skipped: usize,
    pub no_target: usize,
    pub final_state: BubbleTrackState,
    pub bubbles: Vec<BubbleSummary>,
    pub frames: Vec<FrameReport>,
    pub total_ms: f64,
}

impl SequenceReport {
    pub fn new(
        dataset: impl Into<String>,
        diameter_mm: f64,
        frames: Vec<FrameReport>,
        bubbles: Vec<BubbleSummary>,
        final_state: BubbleTrackState,
        total_ms: f64,
    ) -> Self {
        let count = |status| frames.iter().filter(|f| f.status == status).count();
        Self {
            dataset: dataset.into(),
            diameter_mm,
            frame_count: frames.len(),
            segmented: count(FrameStatus::Segmented),
            skipped: count(FrameStatus::Skipped),
            no_target: count(FrameStatus::NoTarget),
            final_state,
            bubbles,
            frames,
            total_ms,
        }
    }
}
