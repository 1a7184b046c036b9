//! Main-bubble selection and cross-frame tracking.
//!
//! A bubble enters the camera window at the bottom, rises and leaves through
//! the top. [`BubbleTrackState`] remembers where in that cycle the sequence is
//! and counts completed transits; [`BubbleSelector`] picks the bubble region
//! out of each frame's mask and advances the state.
//!
//! The state is a plain `Copy` value. The caller creates one per sequence and
//! threads it through every frame in order.

mod selector;
mod state;

pub use selector::{BubbleSelector, SelectedBubble, Selection};
pub use state::{BubbleTrackState, SelectorParams, TrackPhase};
