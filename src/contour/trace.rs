use crate::mask::BinaryMask;

/// Neighbour offsets in clockwise order (image coordinates, y down), from west.
const DIRS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

#[inline]
fn offset(p: [usize; 2], d: usize) -> (isize, isize) {
    (p[0] as isize + DIRS[d].0, p[1] as isize + DIRS[d].1)
}

/// `DIRS` index of an 8-neighbour offset, laid out as `(dy + 1) * 3 + (dx + 1)`.
const DIR_OF_OFFSET: [usize; 9] = [1, 2, 3, 0, 0, 4, 7, 6, 5];

/// Direction from `from` to its 8-neighbour `to`.
#[inline]
fn dir_between(from: (isize, isize), to: (isize, isize)) -> usize {
    let dx = (to.0 - from.0).clamp(-1, 1);
    let dy = (to.1 - from.1).clamp(-1, 1);
    DIR_OF_OFFSET[((dy + 1) * 3 + (dx + 1)) as usize]
}

/// Trace the outer boundary of the region whose first raster pixel is `start`.
///
/// `start` must be foreground with a background west neighbour, which holds
/// for the first pixel of every region in raster order. The returned outline
/// is clockwise and does not repeat `start` at the end.
pub(crate) fn trace_outer_boundary(mask: &BinaryMask, start: [usize; 2]) -> Vec<[usize; 2]> {
    let max_steps = 4 * mask.w * mask.h + 8;
    let mut outline = vec![start];
    let mut current = start;
    let mut back_dir = 0usize;
    let mut first_move: Option<[usize; 2]> = None;

    for _ in 0..max_steps {
        let mut found = None;
        for k in 1..=8 {
            let d = (back_dir + k) % 8;
            let (x, y) = offset(current, d);
            if mask.get_signed(x, y) {
                found = Some(([x as usize, y as usize], (back_dir + k - 1) % 8));
                break;
            }
        }
        let Some((next, prev_d)) = found else {
            // isolated pixel
            break;
        };

        if current == start {
            match first_move {
                Some(first) if first == next => break,
                None => first_move = Some(next),
                _ => {}
            }
        }

        let backtrack = offset(current, prev_d);
        back_dir = dir_between((next[0] as isize, next[1] as isize), backtrack);
        outline.push(next);
        current = next;
    }

    if outline.len() > 1 && outline.last() == Some(&start) {
        outline.pop();
    }
    outline
}
