use super::filters::gaussian_blur;
use crate::contour::{find_regions, Contour};
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::mask::BinaryMask;
use log::debug;
use serde::{Deserialize, Serialize};

/// Rectangle of the flow channel in cropped-frame pixels, half-open on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowArea {
    pub y_min: usize,
    pub y_max: usize,
    pub x_min: usize,
    pub x_max: usize,
}

impl FlowArea {
    pub fn new(y_min: usize, y_max: usize, x_min: usize, x_max: usize) -> Self {
        Self {
            y_min,
            y_max,
            x_min,
            x_max,
        }
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.y_min..self.y_max).contains(&y) && (self.x_min..self.x_max).contains(&x)
    }

    fn encloses(&self, contour: &Contour) -> bool {
        contour.points.iter().all(|&[x, y]| self.contains(x, y))
    }
}

/// Keep the flow channel of `image` when it holds one of the two largest blobs.
///
/// The image is blurred and its non-zero blobs are traced. If the largest or
/// the second largest outline lies completely inside `flow`, the flow window
/// of the unblurred input is kept and everything else is zeroed; otherwise the
/// whole frame is zeroed. A missing second blob counts as inside. The result
/// is blurred once more.
pub fn clean_image(image: &ImageF32, flow: &FlowArea, sigma: f32) -> ImageF32 {
    let smoothed = gaussian_blur(image, sigma);
    let regions = find_regions(&BinaryMask::from_fn(smoothed.w, smoothed.h, |x, y| {
        smoothed.get(x, y) > 0.0
    }));

    let mut by_size: Vec<&Contour> = regions.contours.iter().collect();
    by_size.sort_by(|a, b| b.len().cmp(&a.len()));
    let biggest = &by_size[..by_size.len().min(2)];
    let keep = biggest.len() < 2 || biggest.iter().any(|c| flow.encloses(c));
    debug!(
        "clean_image: {} blobs, two largest {:?}, keep flow area: {keep}",
        regions.contours.len(),
        biggest.iter().map(|c| c.len()).collect::<Vec<_>>()
    );

    let mut out = ImageF32::new(image.w, image.h);
    if keep {
        let (x0, x1) = (flow.x_min.min(image.w), flow.x_max.min(image.w));
        for y in flow.y_min.min(image.h)..flow.y_max.min(image.h) {
            if x0 < x1 {
                out.row_mut(y)[x0..x1].copy_from_slice(&image.row(y)[x0..x1]);
            }
        }
    }
    gaussian_blur(&out, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs(w: usize, h: usize, rects: &[(usize, usize, usize, usize)]) -> ImageF32 {
        ImageF32::from_fn(w, h, |x, y| {
            let inside = rects
                .iter()
                .any(|&(x0, x1, y0, y1)| (x0..x1).contains(&x) && (y0..y1).contains(&y));
            if inside {
                120.0
            } else {
                0.0
            }
        })
    }

    #[test]
    fn keeps_channel_and_drops_outside_noise() {
        // Bubble inside the channel, smaller speck outside it.
        let img = blobs(60, 50, &[(20, 35, 15, 30), (2, 5, 2, 5)]);
        let flow = FlowArea::new(5, 45, 10, 50);
        let out = clean_image(&img, &flow, 0.7);
        assert!(out.get(27, 22) > 100.0);
        assert_eq!(out.get(3, 3), 0.0);
    }

    #[test]
    fn zeroes_frame_when_no_large_blob_is_in_channel() {
        let img = blobs(60, 50, &[(0, 20, 0, 20), (40, 58, 30, 48)]);
        let flow = FlowArea::new(22, 28, 22, 38);
        let out = clean_image(&img, &flow, 0.7);
        assert_eq!(out.count_nonzero(), 0);
    }

    #[test]
    fn empty_frame_stays_empty() {
        let img = ImageF32::new(30, 20);
        let out = clean_image(&img, &FlowArea::new(0, 20, 0, 30), 0.7);
        assert_eq!(out.count_nonzero(), 0);
    }
}
