use crate::error::{Error, Result};
use crate::image::ImageF32;
use log::warn;
use serde::{Deserialize, Serialize};

/// Slice bounds along one axis; negative values count from the far edge.
///
/// `SliceBounds::new(1, -5)` on an axis of length 190 selects `1..185`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceBounds {
    pub start: isize,
    pub end: isize,
}

impl SliceBounds {
    pub fn new(start: isize, end: isize) -> Self {
        Self { start, end }
    }

    /// Concrete half-open range on an axis of length `len`; may be empty.
    pub fn resolve(&self, len: usize) -> std::ops::Range<usize> {
        let clamp = |v: isize| -> usize {
            let v = if v < 0 { v + len as isize } else { v };
            v.clamp(0, len as isize) as usize
        };
        let (start, end) = (clamp(self.start), clamp(self.end));
        start..end.max(start)
    }
}

/// Binary step function used to start every evolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialLevelSet {
    /// Step height; `c` outside the initial region and `-c` inside.
    pub c: f32,
    pub rows: SliceBounds,
    pub cols: SliceBounds,
}

impl Default for InitialLevelSet {
    fn default() -> Self {
        Self {
            c: 2.0,
            rows: SliceBounds::new(1, -5),
            cols: SliceBounds::new(140, 215),
        }
    }
}

impl InitialLevelSet {
    pub fn validate(&self) -> Result<()> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(Error::invalid("c", self.c, "must be positive and finite"));
        }
        Ok(())
    }

    /// Initial level-set function for a `w × h` frame.
    pub fn build(&self, w: usize, h: usize) -> Result<ImageF32> {
        self.validate()?;
        let (rows, cols) = (self.rows.resolve(h), self.cols.resolve(w));
        if rows.is_empty() || cols.is_empty() {
            warn!("initial region {rows:?} x {cols:?} is empty for a {w}x{h} frame");
        }
        let c = self.c;
        Ok(ImageF32::from_fn(w, h, |x, y| {
            if rows.contains(&y) && cols.contains(&x) {
                -c
            } else {
                c
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bounds_count_from_the_end() {
        assert_eq!(SliceBounds::new(1, -5).resolve(190), 1..185);
        assert_eq!(SliceBounds::new(140, 215).resolve(160), 140..160);
        assert_eq!(SliceBounds::new(140, 215).resolve(100), 100..100);
        assert_eq!(SliceBounds::new(-3, -10).resolve(20), 17..17);
    }

    #[test]
    fn default_region_on_operational_frame() {
        let phi = InitialLevelSet::default().build(320, 190).unwrap();
        assert_eq!(phi.get(140, 1), -2.0);
        assert_eq!(phi.get(214, 184), -2.0);
        assert_eq!(phi.get(215, 100), 2.0);
        assert_eq!(phi.get(150, 0), 2.0);
        assert_eq!(phi.get(150, 185), 2.0);
    }

    #[test]
    fn rejects_non_positive_step() {
        let init = InitialLevelSet {
            c: 0.0,
            ..InitialLevelSet::default()
        };
        assert!(init.build(10, 10).is_err());
    }
}
