//! Frame pipeline from a raw video frame to a measured bubble.
//!
//! [`FrameProcessor::process`] runs the whole chain on one frame:
//!
//! 1. background subtraction, row crop and flow-channel clean-up;
//! 2. degenerate-frame check (nothing left after clean-up means skip);
//! 3. edge indicator and initial level set;
//! 4. DRLSE evolution followed by the edge-only refinement;
//! 5. threshold at zero, main-bubble selection and state update;
//! 6. volume, equivalent radius and centroid of the selected bubble.
//!
//! Frames of one recording must be processed in order because the tracking
//! state flows from each frame to the next. Independent recordings share
//! nothing and [`process_batch`] runs them side by side through [`fan_out`].

mod batch;
mod params;
mod processor;

pub use batch::{fan_out, process_batch, Sequence, SequenceRun};
pub use params::{FrameContext, ProcessingParams};
pub use processor::{FrameMeasurement, FrameOutcome, FrameProcessor, SkipReason};
