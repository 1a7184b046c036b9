use super::trace::trace_outer_boundary;
use crate::mask::{BinaryMask, PixelBounds};
use log::trace;
use std::collections::VecDeque;

/// Outer boundary of one 8-connected foreground region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    /// Region label in the owning [`RegionMap`] (1-based).
    pub label: u32,
    /// Boundary pixels `[x, y]`, clockwise from the region's first raster pixel.
    pub points: Vec<[usize; 2]>,
    /// Bounds of the whole region.
    pub bounds: PixelBounds,
    /// Number of pixels in the region.
    pub area: usize,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Label image plus one contour per region, in raster discovery order.
#[derive(Clone, Debug)]
pub struct RegionMap {
    pub w: usize,
    pub h: usize,
    labels: Vec<u32>,
    pub contours: Vec<Contour>,
}

impl RegionMap {
    /// Label at `(x, y)`; 0 is background.
    #[inline]
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.w + x]
    }

    /// Contour with the most boundary points; ties keep the first discovered.
    pub fn largest(&self) -> Option<&Contour> {
        self.contours
            .iter()
            .fold(None, |best: Option<&Contour>, c| match best {
                Some(b) if b.len() >= c.len() => Some(b),
                _ => Some(c),
            })
    }

    /// Mask of the pixels carrying `label`.
    pub fn region_mask(&self, label: u32) -> BinaryMask {
        BinaryMask::from_fn(self.w, self.h, |x, y| label != 0 && self.label_at(x, y) == label)
    }
}

/// Label the 8-connected foreground regions of `mask` and trace their outlines.
pub fn find_regions(mask: &BinaryMask) -> RegionMap {
    let (w, h) = (mask.w, mask.h);
    let mut labels = vec![0u32; w * h];
    let mut contours = Vec::new();
    let mut queue = VecDeque::new();

    for y0 in 0..h {
        for x0 in 0..w {
            if !mask.get(x0, y0) || labels[y0 * w + x0] != 0 {
                continue;
            }
            let label = contours.len() as u32 + 1;
            labels[y0 * w + x0] = label;
            queue.push_back((x0, y0));
            let mut bounds = PixelBounds::at(x0, y0);
            let mut area = 0usize;

            while let Some((x, y)) = queue.pop_front() {
                area += 1;
                bounds.include(x, y);
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x as isize + dx, y as isize + dy);
                        if !mask.get_signed(nx, ny) {
                            continue;
                        }
                        let idx = ny as usize * w + nx as usize;
                        if labels[idx] == 0 {
                            labels[idx] = label;
                            queue.push_back((nx as usize, ny as usize));
                        }
                    }
                }
            }

            let points = trace_outer_boundary(mask, [x0, y0]);
            trace!(
                "region {label}: area={area} outline={} bounds={bounds:?}",
                points.len()
            );
            contours.push(Contour {
                label,
                points,
                bounds,
                area,
            });
        }
    }

    RegionMap {
        w,
        h,
        labels,
        contours,
    }
}
