//! Bubble segmentation and tracking for nozzle recordings.
//!
//! Frames are segmented with a distance-regularized level set evolution
//! (DRLSE). The evolved level set is thresholded into a mask, the main bubble
//! is selected and tracked across frames, and its volume is estimated from
//! the silhouette.
//!
//! ```no_run
//! use bubble_tracker::prelude::*;
//!
//! # fn example(frame: GrayImageU8, background: GrayImageU8) -> bubble_tracker::Result<()> {
//! let processor = FrameProcessor::new(ProcessingParams::default())?;
//! let context = FrameContext::for_nozzle(4.0, FlowArea::new(0, 190, 120, 240));
//! let (state, outcome) =
//!     processor.process(&frame, &background, &context, BubbleTrackState::default())?;
//! if let Some(m) = outcome.measurement() {
//!     println!("bubble {} volume {:.2} mm^3", state.bubble_index, m.volume_mm3);
//! }
//! # Ok(())
//! # }
//! ```

// Numerical core
pub mod drlse;
pub mod field;
pub mod image;
pub mod mask;

// Frame pipeline
pub mod contour;
pub mod measure;
pub mod physics;
pub mod pipeline;
pub mod preprocess;
pub mod tracking;

// Reports, errors and tool configuration
pub mod config;
pub mod diagnostics;
pub mod error;

pub use crate::drlse::{DrlseSolver, EdgeIndicator, EvolutionParams, Potential};
pub use crate::error::{Error, Result};
pub use crate::mask::BinaryMask;
pub use crate::pipeline::{FrameContext, FrameOutcome, FrameProcessor, ProcessingParams};
pub use crate::tracking::{BubbleSelector, BubbleTrackState, TrackPhase};

/// Common imports for driving the pipeline.
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView};
    pub use crate::preprocess::{CropWindow, FlowArea};
    pub use crate::{
        BinaryMask, BubbleTrackState, FrameContext, FrameOutcome, FrameProcessor,
        ProcessingParams,
    };
}
