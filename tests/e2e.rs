mod common;

use bubble_tracker::drlse::{drlse_edge, EdgeIndicator, EvolutionParams, Potential};
use bubble_tracker::image::ImageF32;
use bubble_tracker::pipeline::{process_batch, Sequence, SkipReason};
use bubble_tracker::preprocess::{CropWindow, FlowArea, InitialLevelSet, SliceBounds};
use bubble_tracker::tracking::SelectorParams;
use bubble_tracker::{
    BubbleTrackState, FrameContext, FrameOutcome, FrameProcessor, ProcessingParams, TrackPhase,
};
use common::synthetic_image::{background_u8, bubble_frame};

const W: usize = 64;
const H: usize = 130;

/// Frames are 64x130; the crop keeps rows 5..125, leaving a 64x120 field.
fn context() -> FrameContext {
    FrameContext::new(CropWindow::new(5, 125), FlowArea::new(0, 120, 0, 64))
}

fn processor() -> FrameProcessor {
    let params = ProcessingParams {
        evolution: EvolutionParams::default().with_iterations(10, 20, 10),
        initial_level_set: InitialLevelSet {
            c: 2.0,
            rows: SliceBounds::new(1, -5),
            cols: SliceBounds::new(14, 50),
        },
        selector: SelectorParams {
            top_row: 8,
            bottom_row: 100,
        },
        scale_factor: 1.0,
        ..ProcessingParams::default()
    };
    FrameProcessor::new(params).expect("valid parameters")
}

#[test]
fn centred_square_keeps_sign_pattern() {
    let phi0 = ImageF32::from_fn(200, 200, |x, y| {
        if (90..110).contains(&x) && (90..110).contains(&y) {
            -2.0
        } else {
            2.0
        }
    });
    let g = EdgeIndicator::uniform(200, 200, 0.5).unwrap();

    let phi = drlse_edge(&phi0, &g, 10.0, 0.1, 2.0, 2.0, 20, Potential::SingleWell, 0.0).unwrap();

    assert!(phi.get(100, 100) < 0.0, "centre became {}", phi.get(100, 100));
    for (x, y) in [(0, 0), (199, 0), (0, 199), (199, 199)] {
        assert!(phi.get(x, y) > 0.0, "corner ({x}, {y}) became {}", phi.get(x, y));
    }
}

#[test]
fn segments_and_measures_a_bright_bubble() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Centre (32, 60) in the frame is (32, 55) in the cropped field.
    let frame = bubble_frame(W, H, 32.0, 60.0, 15.0);
    let background = background_u8(W, H);

    let (state, outcome) = processor()
        .process(&frame, &background, &context(), BubbleTrackState::default())
        .unwrap();

    assert_eq!(state, BubbleTrackState::default());
    let m = outcome.measurement().expect("bubble segmented");
    assert!(m.bubble.is_target_frame);
    assert_eq!(m.bubble.bubble_index, 1);

    let b = m.bubble.bounds;
    assert!((38..=42).contains(&b.y_min), "y_min = {}", b.y_min);
    assert!((68..=72).contains(&b.y_max), "y_max = {}", b.y_max);
    assert!((15..=19).contains(&b.x_min), "x_min = {}", b.x_min);

    let r = m.equivalent_radius_mm;
    assert!((12.0..18.0).contains(&r), "equivalent radius {r}");
    let c = m.centroid.expect("non-empty mask");
    assert!((c.x - 32.0).abs() < 1.5 && (c.y - 55.0).abs() < 1.5, "centroid {c:?}");

    assert!(m.timings.stage("evolve").is_some());
    assert!(m.level_set.all_finite());
}

#[test]
fn frame_equal_to_background_is_skipped() {
    let background = background_u8(W, H);
    let state = BubbleTrackState::new(TrackPhase::Disarmed, 3);
    let (next, outcome) = processor()
        .process(&background, &background, &context(), state)
        .unwrap();
    assert_eq!(next, state);
    assert!(matches!(outcome, FrameOutcome::Skipped(SkipReason::EmptyFrame)));
}

#[test]
fn mismatched_background_is_an_error() {
    let frame = bubble_frame(W, H, 32.0, 60.0, 15.0);
    let background = background_u8(W, H + 1);
    assert!(processor()
        .process(&frame, &background, &context(), BubbleTrackState::default())
        .is_err());
}

#[test]
fn sequence_counts_one_bubble_per_transit() {
    let background = background_u8(W, H);
    // Mid-frame, leaving through the top, gone, arriving at the bottom, mid-frame.
    let frames = [
        bubble_frame(W, H, 32.0, 60.0, 12.0),
        bubble_frame(W, H, 32.0, 14.0, 12.0),
        bubble_frame(W, H, 32.0, 14.0, 12.0),
        bubble_frame(W, H, 32.0, 100.0, 12.0),
        bubble_frame(W, H, 32.0, 60.0, 12.0),
    ];

    let (state, outcomes) = processor()
        .process_sequence(&frames, &background, &context(), BubbleTrackState::default())
        .unwrap();

    let targets: Vec<(bool, u32)> = outcomes
        .iter()
        .map(|o| {
            let m = o.measurement().expect("every frame has a bubble");
            (m.bubble.is_target_frame, m.bubble.bubble_index)
        })
        .collect();
    assert_eq!(
        targets,
        vec![(true, 1), (false, 1), (false, 1), (true, 2), (true, 2)]
    );
    assert_eq!(state, BubbleTrackState::new(TrackPhase::Armed, 2));
}

#[test]
fn batch_keeps_sequence_order() {
    let background = background_u8(W, H);
    let sequences = vec![
        Sequence {
            name: "bubble".into(),
            background: background.clone(),
            frames: vec![bubble_frame(W, H, 32.0, 60.0, 12.0)],
            context: context(),
        },
        Sequence {
            name: "empty".into(),
            background: background.clone(),
            frames: vec![background.clone(), background.clone()],
            context: context(),
        },
    ];

    let runs = process_batch(&processor(), &sequences);
    assert_eq!(runs.len(), 2);
    let first = runs[0].as_ref().unwrap();
    let second = runs[1].as_ref().unwrap();
    assert_eq!(first.name, "bubble");
    assert!(first.outcomes[0].is_target());
    assert_eq!(second.name, "empty");
    assert!(second
        .outcomes
        .iter()
        .all(|o| matches!(o, FrameOutcome::Skipped(_))));
    assert_eq!(second.final_state, BubbleTrackState::default());
}
