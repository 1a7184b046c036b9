use super::params::FrameContext;
use super::processor::{FrameOutcome, FrameProcessor};
use crate::error::Result;
use crate::image::GrayImageU8;
use crate::tracking::BubbleTrackState;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One recording held in memory.
#[derive(Clone, Debug)]
pub struct Sequence {
    pub name: String,
    pub background: GrayImageU8,
    /// Frames in recording order.
    pub frames: Vec<GrayImageU8>,
    pub context: FrameContext,
}

/// Outcome of a whole recording.
#[derive(Clone, Debug)]
pub struct SequenceRun {
    pub name: String,
    pub final_state: BubbleTrackState,
    pub outcomes: Vec<FrameOutcome>,
}

/// Process independent recordings, each from the default tracking state.
///
/// Results keep the order of `sequences`; frames within a recording are
/// always processed in order.
pub fn process_batch(processor: &FrameProcessor, sequences: &[Sequence]) -> Vec<Result<SequenceRun>> {
    fan_out(sequences, |seq| run_sequence(processor, seq))
}

/// Apply `f` to independent units of work, on the rayon pool with the
/// `parallel` feature. Results keep the order of `items`.
pub fn fan_out<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        items.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}

fn run_sequence(processor: &FrameProcessor, seq: &Sequence) -> Result<SequenceRun> {
    let (final_state, outcomes) = processor.process_sequence(
        &seq.frames,
        &seq.background,
        &seq.context,
        BubbleTrackState::default(),
    )?;
    Ok(SequenceRun {
        name: seq.name.clone(),
        final_state,
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_out_keeps_input_order() {
        let items: Vec<u32> = (0..257).collect();
        let doubled = fan_out(&items, |v| v * 2);
        assert_eq!(doubled, items.iter().map(|v| v * 2).collect::<Vec<_>>());
        assert!(fan_out(&[] as &[u32], |v| *v).is_empty());
    }
}
