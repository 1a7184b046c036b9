use serde::{Deserialize, Serialize};

/// Scene thresholds for the transit heuristic, in rows of the cropped frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorParams {
    /// A tracked bubble whose top row is above this has left the window.
    pub top_row: usize,
    /// A bubble whose bottom row reaches this, while its top row is still at
    /// or below `top_row`, is a new arrival.
    pub bottom_row: usize,
}

impl Default for SelectorParams {
    fn default() -> Self {
        Self {
            top_row: 8,
            bottom_row: 190,
        }
    }
}

/// Phase of the transit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackPhase {
    /// A bubble is in transit; its frames are targets.
    #[default]
    Armed,
    /// The last bubble has left; waiting for the next one at the bottom.
    Disarmed,
}

/// Tracking state carried from frame to frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleTrackState {
    pub phase: TrackPhase,
    /// Index of the bubble currently (or most recently) in transit.
    pub bubble_index: u32,
}

impl Default for BubbleTrackState {
    /// Armed on bubble 1: the first frames of a recording already show a bubble.
    fn default() -> Self {
        Self {
            phase: TrackPhase::Armed,
            bubble_index: 1,
        }
    }
}

impl BubbleTrackState {
    pub fn new(phase: TrackPhase, bubble_index: u32) -> Self {
        Self {
            phase,
            bubble_index,
        }
    }

    /// Advance the state for a bubble spanning rows `y_min..=y_max`.
    ///
    /// At most one transition happens per call. A silhouette that still
    /// reaches above `top_row` never re-arms, so a tall bubble touching both
    /// thresholds is counted once however many frames show it.
    pub fn transition(self, y_min: usize, y_max: usize, params: &SelectorParams) -> Self {
        match self.phase {
            TrackPhase::Armed if y_min < params.top_row => Self {
                phase: TrackPhase::Disarmed,
                ..self
            },
            TrackPhase::Disarmed if y_max >= params.bottom_row && y_min >= params.top_row => Self {
                phase: TrackPhase::Armed,
                bubble_index: self.bubble_index + 1,
            },
            _ => self,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.phase == TrackPhase::Armed
    }
}
