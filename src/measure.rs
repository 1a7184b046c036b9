//! Geometric measurements of a segmented bubble silhouette.
//!
//! The volume treats every mask row as a disk slice of thickness `scale`,
//! which assumes the bubble is rotationally symmetric about a vertical axis.
use crate::image::ImageView;
use crate::mask::BinaryMask;
use nalgebra::Point2;
use std::f64::consts::PI;

/// Millimetres per pixel of the laboratory camera rig.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.3846;

/// Volume (mm³ for `scale` in mm/px) of the solid of revolution described by `mask`.
pub fn bubble_volume(mask: &BinaryMask, scale: f64) -> f64 {
    mask.row_counts()
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let r = count as f64 / 2.0 * scale;
            PI * r * r * scale
        })
        .sum()
}

/// Radius of the sphere with the given volume.
pub fn equivalent_radius(volume: f64) -> f64 {
    (3.0 * volume / (4.0 * PI)).cbrt()
}

/// Centroid `(x, y)` in pixels from the zeroth and first image moments.
pub fn centroid(mask: &BinaryMask) -> Option<Point2<f64>> {
    let (mut m00, mut m10, mut m01) = (0.0f64, 0.0f64, 0.0f64);
    for (y, row) in mask.rows().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|(_, v)| **v) {
            m00 += 1.0;
            m10 += x as f64;
            m01 += y as f64;
        }
    }
    (m00 > 0.0).then(|| Point2::new(m10 / m00, m01 / m00))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_of_uniform_rows() {
        let mask = BinaryMask::from_fn(40, 30, |x, y| (5..15).contains(&x) && (3..23).contains(&y));
        let expected = 20.0 * PI * (5.0f64 * 0.5).powi(2) * 0.5;
        let v = bubble_volume(&mask, 0.5);
        assert!((v - expected).abs() < 1e-9, "volume {v} != {expected}");
    }

    #[test]
    fn empty_mask_has_zero_volume_and_no_centroid() {
        let mask = BinaryMask::new(8, 8);
        assert_eq!(bubble_volume(&mask, DEFAULT_SCALE_FACTOR), 0.0);
        assert!(centroid(&mask).is_none());
    }

    #[test]
    fn centroid_of_rectangle() {
        let mask = BinaryMask::from_fn(20, 20, |x, y| (2..6).contains(&x) && (10..13).contains(&y));
        let c = centroid(&mask).unwrap();
        assert!((c.x - 3.5).abs() < 1e-12);
        assert!((c.y - 11.0).abs() < 1e-12);
    }

    #[test]
    fn equivalent_radius_inverts_sphere_volume() {
        let r = 1.7;
        let v = 4.0 / 3.0 * PI * r * r * r;
        assert!((equivalent_radius(v) - r).abs() < 1e-12);
    }
}
