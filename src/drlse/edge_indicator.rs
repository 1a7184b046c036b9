use crate::error::{Error, Result};
use crate::field::{gradient, Gradient};
use crate::image::{ImageF32, ImageView};

/// Edge indicator `g` together with its gradient.
///
/// `g` is close to 0 on strong edges and close to 1 in flat regions. It never
/// changes during an evolution, so its gradient is computed once here and
/// shared by every solver iteration.
#[derive(Clone, Debug)]
pub struct EdgeIndicator {
    g: ImageF32,
    grad: Gradient,
}

impl EdgeIndicator {
    /// `g = 1 / (1 + |grad I|^2)` of a smoothed image `I`.
    pub fn from_image(smoothed: &ImageF32) -> Result<Self> {
        let g = gradient(smoothed)
            .magnitude_sq()
            .map(|f| 1.0 / (1.0 + f));
        Self::from_field(g)
    }

    /// Wrap a precomputed indicator after checking it is strictly positive.
    pub fn from_field(g: ImageF32) -> Result<Self> {
        for (y, row) in g.rows().enumerate() {
            if let Some((x, &value)) = row
                .iter()
                .enumerate()
                .find(|(_, v)| !(v.is_finite() && **v > 0.0))
            {
                return Err(Error::NonPositiveEdgeIndicator { x, y, value });
            }
        }
        let grad = gradient(&g);
        Ok(Self { g, grad })
    }

    /// Constant indicator; no edge attraction anywhere.
    pub fn uniform(w: usize, h: usize, value: f32) -> Result<Self> {
        Self::from_field(ImageF32::filled(w, h, value))
    }

    pub fn g(&self) -> &ImageF32 {
        &self.g
    }

    pub fn gradient(&self) -> &Gradient {
        &self.grad
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.g.w, self.g.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_gives_unit_indicator() {
        let img = ImageF32::filled(8, 8, 120.0);
        let edge = EdgeIndicator::from_image(&img).unwrap();
        assert!(edge.g().data.iter().all(|&v| v == 1.0));
        assert!(edge.gradient().gx.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn step_edge_lowers_indicator() {
        let img = ImageF32::from_fn(9, 5, |x, _| if x < 4 { 0.0 } else { 200.0 });
        let edge = EdgeIndicator::from_image(&img).unwrap();
        let on_edge = edge.g().get(4, 2);
        assert!(on_edge < 1e-3, "g on the edge was {on_edge}");
        assert!(on_edge > 0.0);
        assert_eq!(edge.g().get(0, 2), 1.0);
    }

    #[test]
    fn rejects_zero_samples() {
        let mut g = ImageF32::filled(4, 4, 0.5);
        g.set(2, 3, 0.0);
        match EdgeIndicator::from_field(g) {
            Err(Error::NonPositiveEdgeIndicator { x: 2, y: 3, .. }) => {}
            other => panic!("expected NonPositiveEdgeIndicator, got {other:?}"),
        }
    }
}
