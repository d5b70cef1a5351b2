//! Supersampled pixel coverage

use crate::Shape;

/// Default number of samples along each axis of a pixel
pub const SAMPLES_PER_PIXEL: usize = 4;
/// Largest number of samples along each axis of a pixel
pub const MAX_SAMPLES_PER_PIXEL: usize = 256;

/// Fraction of a pixel inside a shape, as `inside / total` samples
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Coverage {
    pub inside: u32,
    pub total: u32,
}

impl Coverage {
    pub fn is_empty(&self) -> bool {
        self.inside == 0
    }
    pub fn is_full(&self) -> bool {
        self.inside == self.total
    }
    /// Coverage in [0,1]
    pub fn fraction(&self) -> f64 {
        f64::from(self.inside) / f64::from(self.total)
    }
}

/// Regular n x n grid sampler
///
/// Each pixel is split into n x n cells and the shape is tested at the
///   center of every cell
///
///     use rhomb::{Polygon, Supersampler};
///
///     let ss = Supersampler::new(4);
///     let d = Polygon::diamond(4, 4);
///     let c = ss.coverage(&d, 1, 1);
///     assert_eq!((c.inside, c.total), (16, 16));
///     let c = ss.coverage(&d, 0, 0);
///     assert_eq!((c.inside, c.total), (0, 16));
///
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Supersampler {
    n: usize,
}

impl Default for Supersampler {
    fn default() -> Self {
        Self::new(SAMPLES_PER_PIXEL)
    }
}

impl Supersampler {
    /// Create a sampler with `n` samples along each axis
    ///
    /// `n` must be in 1 ..= [MAX_SAMPLES_PER_PIXEL](constant.MAX_SAMPLES_PER_PIXEL.html)
    pub fn new(n: usize) -> Self {
        assert!(n > 0 && n <= MAX_SAMPLES_PER_PIXEL,
                "Supersampler needs 1 to {} samples per axis, got {}", MAX_SAMPLES_PER_PIXEL, n);
        Supersampler { n }
    }
    /// Total samples per pixel, n * n
    pub fn total(&self) -> u32 {
        (self.n * self.n) as u32
    }
    /// Sub-pixel offset of sample `i` along one axis
    fn offset(&self, i: usize) -> f64 {
        (i as f64 + 0.5) / self.n as f64
    }
    /// Coverage of pixel (`x`,`y`) by `shape`
    pub fn coverage<S: Shape>(&self, shape: &S, x: usize, y: usize) -> Coverage {
        let (px, py) = (x as f64, y as f64);
        let mut inside = 0;
        for j in 0 .. self.n {
            let sy = py + self.offset(j);
            for i in 0 .. self.n {
                if shape.contains(px + self.offset(i), sy) {
                    inside += 1;
                }
            }
        }
        Coverage { inside, total: self.total() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Polygon;

    struct Everywhere;
    impl Shape for Everywhere {
        fn contains(&self, _x: f64, _y: f64) -> bool { true }
    }
    struct LeftHalf(f64);
    impl Shape for LeftHalf {
        fn contains(&self, x: f64, _y: f64) -> bool { x < self.0 }
    }

    #[test]
    fn full_and_empty() {
        let ss = Supersampler::new(3);
        let c = ss.coverage(&Everywhere, 7, 2);
        assert!(c.is_full());
        assert_eq!(c.fraction(), 1.0);
        let c = ss.coverage(&LeftHalf(0.0), 7, 2);
        assert!(c.is_empty());
        assert_eq!(c.fraction(), 0.0);
    }
    #[test]
    fn half_pixel() {
        for n in 1 ..= 8 {
            let ss = Supersampler::new(n);
            let c = ss.coverage(&LeftHalf(5.5), 5, 0);
            let cols = (0 .. n).filter(|&i| 5.0 + (i as f64 + 0.5) / (n as f64) < 5.5).count();
            assert_eq!(c.inside as usize, cols * n);
        }
    }
    #[test]
    fn diamond_4x4() {
        let ss = Supersampler::default();
        let d = Polygon::diamond(4, 4);
        let expected = [[ 0, 10,  4, 0],
                        [10, 16, 12, 0],
                        [ 4, 12, 10, 0],
                        [ 0,  0,  0, 0]];
        for y in 0 .. 4 {
            for x in 0 .. 4 {
                assert_eq!(ss.coverage(&d, x, y).inside, expected[y][x], "{} {}", x, y);
            }
        }
    }
    #[test]
    fn bounded_and_exact() {
        let d = Polygon::diamond(13, 9);
        for n in 1 ..= 6 {
            let ss = Supersampler::new(n);
            for y in 0 .. 9 {
                for x in 0 .. 13 {
                    let c = ss.coverage(&d, x, y);
                    assert_eq!(c.total as usize, n * n);
                    assert!(c.inside <= c.total);
                    let f = c.fraction();
                    assert!(f >= 0.0 && f <= 1.0);
                    assert_eq!((f * (n * n) as f64).round(), f64::from(c.inside));
                }
            }
        }
    }
    #[test]
    #[should_panic]
    fn zero_samples() {
        Supersampler::new(0);
    }
    #[test]
    #[should_panic]
    fn too_many_samples() {
        Supersampler::new(MAX_SAMPLES_PER_PIXEL + 1);
    }
    #[test]
    fn max_samples_full_pixel() {
        let ss = Supersampler::new(MAX_SAMPLES_PER_PIXEL);
        let c = ss.coverage(&Everywhere, 0, 0);
        assert_eq!(c.total as usize, MAX_SAMPLES_PER_PIXEL * MAX_SAMPLES_PER_PIXEL);
        assert!(c.is_full());
        assert_eq!(c.fraction(), 1.0);
    }
}
