//! Serializable reports produced by the frame pipeline and the batch tool.
//!
//! `FrameReport` condenses a [`crate::pipeline::FrameOutcome`] into plain
//! numbers, `SequenceReport` collects the frames of one recording together
//! with per-bubble summaries. All reports serialize with camelCase keys.

pub mod report;
pub mod summary;
pub mod timing;

pub use report::{FrameReport, FrameStatus, SequenceReport};
pub use summary::{summarize_bubbles, BubbleSummary};
pub use timing::{StageTiming, TimingBreakdown};
