use super::params::{FrameContext, ProcessingParams};
use crate::diagnostics::TimingBreakdown;
use crate::drlse::{DrlseSolver, EdgeIndicator};
use crate::error::Result;
use crate::image::{ImageF32, ImageView};
use crate::mask::BinaryMask;
use crate::measure::{bubble_volume, centroid, equivalent_radius};
use crate::preprocess::{clean_image, subtract_background};
use crate::tracking::{BubbleSelector, BubbleTrackState, SelectedBubble, Selection};
use log::debug;
use nalgebra::Point2;
use std::time::Instant;

/// Why a frame produced no segmentation at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing survived background subtraction and clean-up.
    EmptyFrame,
}

/// Bubble measured on one frame.
#[derive(Clone, Debug)]
pub struct FrameMeasurement {
    pub bubble: SelectedBubble,
    /// Final level-set function, kept for inspection.
    pub level_set: ImageF32,
    pub volume_mm3: f64,
    pub equivalent_radius_mm: f64,
    /// Centroid of the selected bubble in cropped-frame pixels.
    pub centroid: Option<Point2<f64>>,
    pub timings: TimingBreakdown,
}

/// Result of one frame. Only configuration problems are errors.
#[derive(Clone, Debug)]
pub enum FrameOutcome {
    Skipped(SkipReason),
    /// The evolution left no foreground region.
    NoTarget,
    Segmented(Box<FrameMeasurement>),
}

impl FrameOutcome {
    pub fn measurement(&self) -> Option<&FrameMeasurement> {
        match self {
            FrameOutcome::Segmented(m) => Some(m),
            _ => None,
        }
    }

    /// Segmented and part of a bubble transit.
    pub fn is_target(&self) -> bool {
        self.measurement()
            .is_some_and(|m| m.bubble.is_target_frame)
    }
}

/// Runs the per-frame chain with one validated parameter set.
#[derive(Clone, Debug)]
pub struct FrameProcessor {
    params: ProcessingParams,
    solver: DrlseSolver,
    selector: BubbleSelector,
}

impl FrameProcessor {
    pub fn new(params: ProcessingParams) -> Result<Self> {
        params.validate()?;
        let solver = DrlseSolver::new(params.evolution.clone())?;
        let selector = BubbleSelector::new(params.selector);
        Ok(Self {
            params,
            solver,
            selector,
        })
    }

    pub fn params(&self) -> &ProcessingParams {
        &self.params
    }

    /// Process one frame and advance the tracking state.
    ///
    /// Skipped frames and frames without a region leave `state` unchanged.
    pub fn process<F, B>(
        &self,
        frame: &F,
        background: &B,
        context: &FrameContext,
        state: BubbleTrackState,
    ) -> Result<(BubbleTrackState, FrameOutcome)>
    where
        F: ImageView<Pixel = u8>,
        B: ImageView<Pixel = u8>,
    {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let p = &self.params;

        let stage = Instant::now();
        let subtracted =
            subtract_background(frame, background, p.preprocess.subtract_threshold)?;
        let cropped = context
            .crop
            .apply(&ImageF32::from_u8(&subtracted.as_view()))?;
        let smoothed = clean_image(&cropped, &context.flow_area, p.preprocess.sigma);
        timings.push("preprocess", elapsed_ms(stage));

        if smoothed.count_nonzero() == 0 {
            debug!("FrameProcessor: empty frame after clean-up, skipping");
            return Ok((state, FrameOutcome::Skipped(SkipReason::EmptyFrame)));
        }

        let stage = Instant::now();
        let edge = EdgeIndicator::from_image(&smoothed)?;
        let phi0 = p.initial_level_set.build(smoothed.w, smoothed.h)?;
        timings.push("edge_indicator", elapsed_ms(stage));

        let stage = Instant::now();
        let evolved = self.solver.evolve(&phi0, &edge)?;
        timings.push("evolve", elapsed_ms(stage));

        let stage = Instant::now();
        let phi = self.solver.refine(&evolved, &edge)?;
        timings.push("refine", elapsed_ms(stage));

        let stage = Instant::now();
        let mask = BinaryMask::from_level_set(&phi);
        let (next, selection) = self.selector.select(&mask, state);
        timings.push("select", elapsed_ms(stage));

        let bubble = match selection {
            Selection::NoTarget => {
                debug!("FrameProcessor: evolution left no region");
                return Ok((next, FrameOutcome::NoTarget));
            }
            Selection::Target(bubble) => bubble,
        };

        let volume_mm3 = bubble_volume(&bubble.mask, p.scale_factor);
        let measurement = FrameMeasurement {
            equivalent_radius_mm: equivalent_radius(volume_mm3),
            centroid: centroid(&bubble.mask),
            volume_mm3,
            bubble,
            level_set: phi,
            timings: TimingBreakdown {
                total_ms: elapsed_ms(total_start),
                ..timings
            },
        };
        debug!(
            "FrameProcessor: bubble {} target={} volume={:.3} mm^3 in {:.1} ms",
            measurement.bubble.bubble_index,
            measurement.bubble.is_target_frame,
            measurement.volume_mm3,
            measurement.timings.total_ms
        );
        Ok((next, FrameOutcome::Segmented(Box::new(measurement))))
    }

    /// Process frames in order, threading the state from one to the next.
    pub fn process_sequence<'a, F, B, I>(
        &self,
        frames: I,
        background: &B,
        context: &FrameContext,
        initial: BubbleTrackState,
    ) -> Result<(BubbleTrackState, Vec<FrameOutcome>)>
    where
        F: ImageView<Pixel = u8> + 'a,
        B: ImageView<Pixel = u8>,
        I: IntoIterator<Item = &'a F>,
    {
        let mut state = initial;
        let mut outcomes = Vec::new();
        for frame in frames {
            let (next, outcome) = self.process(frame, background, context, state)?;
            state = next;
            outcomes.push(outcome);
        }
        Ok((state, outcomes))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
