/// Read access to a row-major single-channel image.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    /// `(width, height)`.
    fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }
}

/// Write access on top of [`ImageView`].
pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    fn as_mut_slice(&mut self) -> Option<&mut [Self::Pixel]> {
        None
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
