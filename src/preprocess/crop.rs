use crate::error::{Error, Result};
use crate::image::ImageF32;
use log::warn;
use serde::{Deserialize, Serialize};

/// Half-open row window `row_start..row_end` kept from every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropWindow {
    pub row_start: usize,
    pub row_end: usize,
}

impl CropWindow {
    pub fn new(row_start: usize, row_end: usize) -> Self {
        Self { row_start, row_end }
    }

    /// Window used for the recordings of a nozzle with the given diameter (mm).
    /// 4 mm keeps rows 5..195, every other diameter rows 5..220.
    pub fn for_nozzle(diameter_mm: f64) -> Self {
        if diameter_mm == 4.0 {
            Self::new(5, 195)
        } else {
            Self::new(5, 220)
        }
    }

    pub fn rows(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Crop `image`, clamping the window to its height.
    pub fn apply(&self, image: &ImageF32) -> Result<ImageF32> {
        let end = self.row_end.min(image.h);
        if end < self.row_end {
            warn!(
                "crop window {}..{} clamped to frame height {}",
                self.row_start, self.row_end, image.h
            );
        }
        if self.row_start >= end {
            return Err(Error::invalid(
                "crop_window",
                self.row_start as f64,
                "window starts at or below the last frame row",
            ));
        }
        Ok(image.crop_rows(self.row_start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nozzle_windows() {
        assert_eq!(CropWindow::for_nozzle(4.0), CropWindow::new(5, 195));
        assert_eq!(CropWindow::for_nozzle(2.0), CropWindow::new(5, 220));
        assert_eq!(CropWindow::for_nozzle(4.0).rows(), 190);
    }

    #[test]
    fn clamps_to_frame_height() {
        let img = ImageF32::from_fn(3, 100, |_, y| y as f32);
        let out = CropWindow::new(5, 220).apply(&img).unwrap();
        assert_eq!(out.h, 95);
        assert_eq!(out.get(0, 0), 5.0);
        assert!(CropWindow::new(100, 220).apply(&img).is_err());
    }
}
