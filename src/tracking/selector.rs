use super::state::{BubbleTrackState, SelectorParams};
use crate::contour::{find_regions, Contour};
use crate::mask::{BinaryMask, PixelBounds};
use log::debug;

/// The bubble picked out of one frame.
#[derive(Clone, Debug)]
pub struct SelectedBubble {
    /// Selected region only, restricted to its bounding box.
    pub mask: BinaryMask,
    pub contour: Contour,
    pub bounds: PixelBounds,
    /// The state after this frame is armed; the frame belongs to a transit.
    pub is_target_frame: bool,
    pub bubble_index: u32,
}

/// Result of [`BubbleSelector::select`].
#[derive(Clone, Debug)]
pub enum Selection {
    /// The mask has no foreground region.
    NoTarget,
    Target(SelectedBubble),
}

impl Selection {
    pub fn target(&self) -> Option<&SelectedBubble> {
        match self {
            Selection::NoTarget => None,
            Selection::Target(bubble) => Some(bubble),
        }
    }
}

/// Picks the largest region of a mask and advances the transit state.
#[derive(Clone, Debug, Default)]
pub struct BubbleSelector {
    params: SelectorParams,
}

impl BubbleSelector {
    pub fn new(params: SelectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SelectorParams {
        &self.params
    }

    pub fn select(
        &self,
        mask: &BinaryMask,
        state: BubbleTrackState,
    ) -> (BubbleTrackState, Selection) {
        let regions = find_regions(mask);
        let Some(contour) = regions.largest() else {
            debug!("BubbleSelector: no regions, state unchanged ({state:?})");
            return (state, Selection::NoTarget);
        };

        let bounds = contour.bounds;
        let next = state.transition(bounds.y_min, bounds.y_max, &self.params);
        debug!(
            "BubbleSelector: {} regions, picked #{} ({} points, rows {}..={}), {:?} -> {:?}",
            regions.contours.len(),
            contour.label,
            contour.len(),
            bounds.y_min,
            bounds.y_max,
            state,
            next
        );

        let bubble = SelectedBubble {
            mask: regions.region_mask(contour.label).cropped_to(&bounds),
            contour: contour.clone(),
            bounds,
            is_target_frame: next.is_armed(),
            bubble_index: next.bubble_index,
        };
        (next, Selection::Target(bubble))
    }
}
