use crate::error::{Error, Result};
use crate::image::{GrayImageU8, ImageView};

/// `frame - background`, with differences below `threshold` set to 0.
///
/// Negative differences are always below the threshold.
pub fn subtract_background<F, B>(frame: &F, background: &B, threshold: u8) -> Result<GrayImageU8>
where
    F: ImageView<Pixel = u8>,
    B: ImageView<Pixel = u8>,
{
    if frame.dims() != background.dims() {
        return Err(Error::ShapeMismatch {
            expected: frame.dims(),
            actual: background.dims(),
        });
    }
    let (w, h) = frame.dims();
    let mut data = Vec::with_capacity(w * h);
    for (f_row, b_row) in frame.rows().zip(background.rows()) {
        data.extend(f_row.iter().zip(b_row).map(|(&f, &b)| {
            let diff = f as i16 - b as i16;
            if diff < threshold as i16 {
                0
            } else {
                diff as u8
            }
        }));
    }
    Ok(GrayImageU8::new(w, h, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_differences_at_or_above_threshold() {
        let frame = GrayImageU8::new(4, 1, vec![100, 114, 115, 250]);
        let bg = GrayImageU8::new(4, 1, vec![100, 100, 100, 10]);
        let out = subtract_background(&frame, &bg, 15).unwrap();
        assert_eq!(out.into_raw(), vec![0, 0, 15, 240]);
    }

    #[test]
    fn darker_than_background_is_zero() {
        let frame = GrayImageU8::new(2, 1, vec![0, 10]);
        let bg = GrayImageU8::new(2, 1, vec![200, 200]);
        assert_eq!(
            subtract_background(&frame, &bg, 0).unwrap().into_raw(),
            vec![0, 0]
        );
    }

    #[test]
    fn rejects_mismatched_background() {
        let frame = GrayImageU8::zeros(4, 3);
        let bg = GrayImageU8::zeros(3, 4);
        assert_eq!(
            subtract_background(&frame, &bg, 15).unwrap_err(),
            Error::ShapeMismatch {
                expected: (4, 3),
                actual: (3, 4)
            }
        );
    }
}
