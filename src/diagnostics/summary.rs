use super::report::{FrameReport, FrameStatus};
use crate::measure::equivalent_radius;
use crate::physics::FluidProperties;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate of the target frames of one bubble transit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleSummary {
    pub bubble_index: u32,
    pub frames: usize,
    pub mean_volume_mm3: f64,
    pub equivalent_radius_mm: f64,
    pub eotvos: f64,
    /// Vertical centroid speed between the first and last target frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rise_velocity_px_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reynolds: Option<f64>,
}

/// Group target frames by bubble index and derive per-bubble quantities.
///
/// Velocities (and with them Reynolds numbers) need `frame_rate` in frames
/// per second and at least two target frames with a centroid.
pub fn summarize_bubbles(
    frames: &[FrameReport],
    fluid: &FluidProperties,
    scale: f64,
    frame_rate: Option<f64>,
) -> Vec<BubbleSummary> {
    let mut groups: BTreeMap<u32, Vec<&FrameReport>> = BTreeMap::new();
    for f in frames {
        if f.status != FrameStatus::Segmented || !f.is_target_frame {
            continue;
        }
        if let Some(index) = f.bubble_index {
            groups.entry(index).or_default().push(f);
        }
    }

    groups
        .into_iter()
        .map(|(bubble_index, group)| {
            let volumes: Vec<f64> = group.iter().filter_map(|f| f.volume_mm3).collect();
            let mean_volume_mm3 = if volumes.is_empty() {
                0.0
            } else {
                volumes.iter().sum::<f64>() / volumes.len() as f64
            };
            let radius_mm = equivalent_radius(mean_volume_mm3);
            let rise_velocity_px_s = frame_rate.and_then(|fps| rise_velocity(&group, fps));
            BubbleSummary {
                bubble_index,
                frames: group.len(),
                mean_volume_mm3,
                equivalent_radius_mm: radius_mm,
                eotvos: fluid.eotvos(radius_mm * 1e-3),
                rise_velocity_px_s,
                reynolds: rise_velocity_px_s.map(|v| fluid.reynolds(v, scale, radius_mm * 1e-3)),
            }
        })
        .collect()
}

fn rise_velocity(group: &[&FrameReport], fps: f64) -> Option<f64> {
    let mut with_centroid = group.iter().filter_map(|f| f.centroid.map(|c| (f.ordinal, c[1])));
    let first = with_centroid.next()?;
    let last = with_centroid.last()?;
    let frames = last.0.checked_sub(first.0).filter(|&d| d > 0)?;
    Some((first.1 - last.1).abs() / frames as f64 * fps)
}
