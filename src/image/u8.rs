use super::traits::{ImageView, ImageViewMut};

/// Borrowed 8-bit grayscale view.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw tightly packed bytes. Panics if `data` is shorter than `width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert!(
            data.len() >= width * height,
            "buffer of {} bytes cannot hold {width}x{height}",
            data.len()
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height])
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        let len = self.width * self.height;
        Some(&mut self.data[..len])
    }
}
