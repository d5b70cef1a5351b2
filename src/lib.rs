
//! Anti-aliased diamond rasterizer writing 24-bit BMP files
//!
//! How does this work
//!    shape = Polygon::diamond(width, height)
//!    rbuf  = render_shape(shape, width, height, fill, opts)
//!  Per pixel, in row order
//!    Supersampler::coverage()   -- n x n samples at cell centers
//!      Shape::contains()
//!        sign()                 -- one per polygon edge
//!    shade()                    -- white to fill, truncated per channel
//!    RenderingBuffer::put()     -- (B,G,R), rows padded to 4 bytes
//!  Write to Disk
//!    BmpHeader::to_bytes()      -- 14 byte file + 40 byte info header
//!    write_file()               -- header then pixel data, tmp + rename
//!
//! Render and save a diamond
//!
//!     use rhomb::{Polygon, Rgb8, RenderOptions};
//!
//!     let shape = Polygon::diamond(8, 6);
//!     let red = Rgb8::new(255, 0, 0);
//!     let rbuf = rhomb::render_shape(&shape, 8, 6, red, &RenderOptions::default()).unwrap();
//!     let bytes = rhomb::bmp::encode(&rbuf).unwrap();
//!     assert_eq!(bytes.len(), 54 + 6 * 24);
//!

pub mod geometry;
pub mod sample;
pub mod color;
pub mod shade;
pub mod buffer;
pub mod render;
pub mod bmp;
pub mod cli;
pub mod error;

pub use crate::geometry::*;
pub use crate::sample::*;
pub use crate::color::*;
pub use crate::shade::*;
pub use crate::buffer::*;
pub use crate::render::*;
pub use crate::bmp::{BmpHeader, create_bmp};
pub use crate::cli::Args;
pub use crate::error::*;

/// Region of the plane that can be tested point by point
pub trait Shape {
    /// Is the point (`x`,`y`) within the shape
    fn contains(&self, x: f64, y: f64) -> bool;
}

/// Access to raw pixel component data
pub trait PixelData<'a> {
    fn pixeldata(&'a self) -> &'a [u8];
}
