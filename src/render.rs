//! Renderer

use crate::buffer::{RenderingBuffer, BPP};
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::geometry::Polygon;
use crate::sample::{Supersampler, SAMPLES_PER_PIXEL, MAX_SAMPLES_PER_PIXEL};
use crate::shade::shade;
use crate::Shape;

use rayon::prelude::*;

/// Rendering options
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct RenderOptions {
    /// Samples along each axis of a pixel
    pub samples: usize,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { samples: SAMPLES_PER_PIXEL, parallel: false }
    }
}

impl RenderOptions {
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Render a single row `y`, padding bytes are left untouched
fn render_row<S: Shape>(row: &mut [u8], y: usize, width: usize,
                        shape: &S, ss: &Supersampler, fill: Rgb8) {
    for (x, px) in row[.. width * BPP].chunks_exact_mut(BPP).enumerate() {
        let c = shade(ss.coverage(shape, x, y), fill);
        px.copy_from_slice(&c.bgr());
    }
    log::trace!("row {} done", y);
}

fn check_dimension(name: &'static str, v: usize) -> Result<()> {
    if v == 0 {
        return Err(Error::InvalidDimension { name, value: v.to_string() });
    }
    Ok(())
}

/// Render `shape` filled with `fill` over a white background
///
/// Every pixel of the `width` x `height` image is supersampled and shaded
///   into a padded (B,G,R) buffer.  With `opts.parallel` rows are spread
///   over threads; the output is identical either way.
pub fn render_shape<S>(shape: &S, width: usize, height: usize,
                       fill: Rgb8, opts: &RenderOptions) -> Result<RenderingBuffer>
    where S: Shape + Sync
{
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    if opts.samples == 0 || opts.samples > MAX_SAMPLES_PER_PIXEL {
        return Err(Error::Samples(opts.samples));
    }
    let ss = Supersampler::new(opts.samples);
    let mut rbuf = RenderingBuffer::new(width, height);
    let stride = rbuf.stride;
    log::debug!("render {}x{} stride {} samples {}x{} parallel {}",
                width, height, stride, opts.samples, opts.samples, opts.parallel);
    if opts.parallel {
        rbuf.data.par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| render_row(row, y, width, shape, &ss, fill));
    } else {
        for (y, row) in rbuf.data.chunks_mut(stride).enumerate() {
            render_row(row, y, width, shape, &ss, fill);
        }
    }
    Ok(rbuf)
}

/// Render the diamond inscribed in a `width` x `height` image
pub fn render_diamond(width: usize, height: usize, fill: Rgb8,
                      opts: &RenderOptions) -> Result<RenderingBuffer> {
    let shape = Polygon::diamond(width, height);
    log::debug!("diamond {:?}", shape.vertices());
    render_shape(&shape, width, height, fill, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_4x4() {
        let rbuf = render_diamond(4, 4, Rgb8::new(255,0,0), &RenderOptions::default()).unwrap();
        let expected : [u8; 48] = [
            255,255,255,  95, 95,255, 191,191,255, 255,255,255,
             95, 95,255,   0,  0,255,  63, 63,255, 255,255,255,
            191,191,255,  63, 63,255,  95, 95,255, 255,255,255,
            255,255,255, 255,255,255, 255,255,255, 255,255,255,
        ];
        assert_eq!(&rbuf.data[..], &expected[..]);
    }
    #[test]
    fn parallel_matches_sequential() {
        let fill = Rgb8::new(0x30, 0x80, 0x10);
        for &(w,h) in [(1,1),(5,3),(17,11),(64,33)].iter() {
            let opts = RenderOptions::default();
            let a = render_diamond(w, h, fill, &opts).unwrap();
            let b = render_diamond(w, h, fill, &opts.parallel(true)).unwrap();
            assert_eq!(a, b, "{}x{}", w, h);
        }
    }
    #[test]
    fn padding_stays_zero() {
        let rbuf = render_diamond(5, 7, Rgb8::black(), &RenderOptions::default()).unwrap();
        for row in rbuf.rows() {
            assert_eq!(row.len(), 16);
            assert_eq!(row[15], 0);
        }
    }
    #[test]
    fn rejects_zero() {
        let fill = Rgb8::black();
        let opts = RenderOptions::default();
        assert!(matches!(render_diamond(0, 4, fill, &opts),
                         Err(Error::InvalidDimension { name: "width", .. })));
        assert!(matches!(render_diamond(4, 0, fill, &opts),
                         Err(Error::InvalidDimension { name: "height", .. })));
    }
    #[test]
    fn samples_bounded() {
        let fill = Rgb8::black();
        let opts = RenderOptions::default();
        for &n in [0, MAX_SAMPLES_PER_PIXEL + 1, 65536, 1 << 20].iter() {
            match render_diamond(4, 4, fill, &opts.samples(n)) {
                Err(Error::Samples(v)) => assert_eq!(v, n),
                other => panic!("{} samples gave {:?}", n, other),
            }
        }
        let rbuf = render_diamond(1, 1, fill, &opts.samples(MAX_SAMPLES_PER_PIXEL)).unwrap();
        assert_eq!(rbuf.get((0,0)), fill);
    }
    #[test]
    fn more_samples_same_interior() {
        let fill = Rgb8::new(200, 10, 10);
        let a = render_diamond(21, 21, fill, &RenderOptions::default()).unwrap();
        let b = render_diamond(21, 21, fill, &RenderOptions::default().samples(8)).unwrap();
        assert_eq!(a.get((10,10)), fill);
        assert_eq!(b.get((10,10)), fill);
        assert_eq!(a.get((0,0)), Rgb8::white());
        assert_eq!(b.get((0,0)), Rgb8::white());
    }
}
