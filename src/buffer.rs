//! Rendering buffer

use crate::color::Rgb8;
use crate::PixelData;

/// Bytes per pixel, Blue, Green, Red
pub const BPP: usize = 3;

/// Bytes of pixel data in a row of `width` pixels, before padding
pub fn bytes_per_row(width: usize) -> usize {
    width * BPP
}

/// Zero bytes needed to bring a row of `width` pixels to a multiple of 4
///
///     use rhomb::padding;
///
///     assert_eq!(padding(1), 1);
///     assert_eq!(padding(2), 2);
///     assert_eq!(padding(3), 3);
///     assert_eq!(padding(4), 0);
///
pub fn padding(width: usize) -> usize {
    (4 - bytes_per_row(width) % 4) % 4
}

/// Bytes in a row of `width` pixels, including padding
pub fn stride(width: usize) -> usize {
    bytes_per_row(width) + padding(width)
}

/// Rendering Buffer
///
/// Rows are stored one after another, each `stride` bytes long: `width`
///   pixels of (B,G,R) followed by zeroed padding.  Row `0` is stored
///   first, which a bitmap with a positive height displays at the bottom.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image, including row padding
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per row, including padding
    pub stride: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height
    ///
    /// Data for the Image is allocated and zeroed
    pub fn new(width: usize, height: usize) -> Self {
        let stride = stride(width);
        RenderingBuffer {
            width, height, stride, data: vec![0u8; stride * height]
        }
    }
    /// Size of underlying Rendering Buffer, height * stride
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Padding bytes at the end of each row
    pub fn padding(&self) -> usize {
        self.stride - bytes_per_row(self.width)
    }
    /// Complete row `i`, including padding
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let start = i * self.stride;
        &self.data[start .. start + self.stride]
    }
    /// Rows in storage order
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.data.chunks(self.stride.max(1))
    }
    /// Set pixel at (`x`,`y`) to `c`
    pub fn put(&mut self, id: (usize, usize), c: Rgb8) {
        self[id][.. BPP].copy_from_slice(&c.bgr());
    }
    /// Get pixel at (`x`,`y`)
    pub fn get(&self, id: (usize, usize)) -> Rgb8 {
        Rgb8::from_bgr(&self[id])
    }
    /// Fill every pixel with `c`, padding is left untouched
    pub fn fill(&mut self, c: Rgb8) {
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                self.put((x,y), c);
            }
        }
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = index.1 * self.stride + index.0 * BPP;
        &self.data[i .. i + BPP]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = index.1 * self.stride + index.0 * BPP;
        &mut self.data[i .. i + BPP]
    }
}

impl<'a> PixelData<'a> for RenderingBuffer {
    fn pixeldata(&'a self) -> &'a [u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_law() {
        for w in 1 .. 200 {
            let p = padding(w);
            assert!(p <= 3);
            assert_eq!(bytes_per_row(w), 3 * w);
            assert_eq!((3 * w + p) % 4, 0);
            assert_eq!(stride(w), 3 * w + p);
        }
    }
    #[test]
    fn put_get() {
        let mut rbuf = RenderingBuffer::new(3, 2);
        assert_eq!(rbuf.stride, 12);
        assert_eq!(rbuf.padding(), 3);
        assert_eq!(rbuf.len(), 24);
        let c = Rgb8::new(10, 20, 30);
        rbuf.put((2,1), c);
        assert_eq!(rbuf.get((2,1)), c);
        assert_eq!(&rbuf.row(1)[6 .. 12], &[30, 20, 10, 0, 0, 0]);
    }
    #[test]
    fn fill_leaves_padding() {
        let mut rbuf = RenderingBuffer::new(1, 3);
        rbuf.fill(Rgb8::white());
        for row in rbuf.rows() {
            assert_eq!(row, &[255, 255, 255, 0]);
        }
    }
    #[test]
    #[should_panic]
    fn out_of_range() {
        let rbuf = RenderingBuffer::new(2, 2);
        rbuf.get((2, 0));
    }
}
