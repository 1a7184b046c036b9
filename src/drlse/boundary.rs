//! Neumann (zero-flux) boundary condition by offset-2 mirroring.
//!
//! The border is copied from the samples two steps inside: row 0 from row 2,
//! the last row from the third-to-last, likewise for columns, and each corner
//! from its diagonal neighbour at offset 2. With central differences this makes
//! the normal derivative at the border vanish.
use crate::error::{Error, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Mirror the border of `f` in place.
pub fn neumann_bound_in_place(f: &mut ImageF32) -> Result<()> {
    let (nx, ny) = (f.w, f.h);
    if nx < 3 || ny < 3 {
        return Err(Error::FieldTooSmall {
            width: nx,
            height: ny,
        });
    }

    let corners = [
        ((0, 0), (2, 2)),
        ((nx - 1, 0), (nx - 3, 2)),
        ((0, ny - 1), (2, ny - 3)),
        ((nx - 1, ny - 1), (nx - 3, ny - 3)),
    ];
    for ((dx, dy), (sx, sy)) in corners {
        let v = f.get(sx, sy);
        f.set(dx, dy, v);
    }

    copy_row_interior(f, 2, 0);
    copy_row_interior(f, ny - 3, ny - 1);

    for y in 1..ny - 1 {
        let row = f.row_mut(y);
        row[0] = row[2];
        row[nx - 1] = row[nx - 3];
    }
    Ok(())
}

/// Mirrored copy of `f`.
pub fn neumann_bound(f: &ImageF32) -> Result<ImageF32> {
    let mut g = f.clone();
    neumann_bound_in_place(&mut g)?;
    Ok(g)
}

fn copy_row_interior(f: &mut ImageF32, src: usize, dst: usize) {
    let w = f.w;
    let (s, d) = (f.idx(1, src), f.idx(1, dst));
    f.data.copy_within(s..s + w - 2, d);
}
