//! Writing of BMP (Windows Bitmap) files
//!
//! Uncompressed 24 bits per pixel, `BITMAPINFOHEADER` variant.
//!   All multi-byte fields are little-endian.
//!
//! See <https://en.wikipedia.org/wiki/BMP_file_format>
//!
use crate::buffer::{stride, RenderingBuffer};
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::render::{render_diamond, RenderOptions};
use crate::PixelData;

use std::convert::TryFrom;
use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Size of the file header in bytes
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the info header in bytes
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the pixel data from the start of the file
pub const PIXEL_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// File and info headers of a 24-bit bitmap
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct BmpHeader {
    /// Total file size in bytes
    pub file_size: u32,
    /// Image width in pixels
    pub width: i32,
    /// Image height in pixels; positive, rows stored bottom to top
    pub height: i32,
    /// Size of the pixel data in bytes, including row padding
    pub image_size: u32,
}

impl BmpHeader {
    /// Header for a `width` x `height` image
    ///
    ///     use rhomb::BmpHeader;
    ///
    ///     let h = BmpHeader::new(4, 4).unwrap();
    ///     assert_eq!(h.file_size, 102);
    ///     assert_eq!(h.image_size, 48);
    ///     assert_eq!(&h.to_bytes()[..2], b"BM");
    ///
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let too_large = || Error::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let image_size = stride(width).checked_mul(height)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size.checked_add(PIXEL_OFFSET).ok_or_else(too_large)?;
        Ok(BmpHeader { file_size, width: w, height: h, image_size })
    }
    /// Serialize the 14 byte file header followed by the 40 byte info header
    pub fn to_bytes(&self) -> [u8; PIXEL_OFFSET as usize] {
        let mut out = [0u8; PIXEL_OFFSET as usize];
        let fields : [&[u8]; 16] = [
            b"BM",                              // magic
            &self.file_size.to_le_bytes(),
            &0u16.to_le_bytes(),                // reserved
            &0u16.to_le_bytes(),                // reserved
            &PIXEL_OFFSET.to_le_bytes(),
            &INFO_HEADER_SIZE.to_le_bytes(),
            &self.width.to_le_bytes(),
            &self.height.to_le_bytes(),
            &1u16.to_le_bytes(),                // planes
            &24u16.to_le_bytes(),               // bits per pixel
            &0u32.to_le_bytes(),                // compression, none
            &self.image_size.to_le_bytes(),
            &0u32.to_le_bytes(),                // horizontal resolution
            &0u32.to_le_bytes(),                // vertical resolution
            &0u32.to_le_bytes(),                // palette colors
            &0u32.to_le_bytes(),                // important colors
        ];
        let mut i = 0;
        for f in fields.iter() {
            out[i .. i + f.len()].copy_from_slice(f);
            i += f.len();
        }
        debug_assert_eq!(i, out.len());
        out
    }
    /// Read back the headers written by [`to_bytes`](#method.to_bytes)
    ///
    /// Only 24-bit uncompressed bitmaps with a 40 byte info header are accepted
    pub fn from_bytes(b: &[u8]) -> Result<Self> {
        let invalid = |what: &str| Error::Io(io::Error::new(io::ErrorKind::InvalidData,
                                                            format!("not a 24-bit bitmap: {}", what)));
        if b.len() < PIXEL_OFFSET as usize {
            return Err(invalid("short header"));
        }
        let u16_at = |i: usize| u16::from_le_bytes([b[i], b[i+1]]);
        let u32_at = |i: usize| u32::from_le_bytes([b[i], b[i+1], b[i+2], b[i+3]]);
        if &b[0..2] != b"BM" {
            return Err(invalid("magic"));
        }
        if u32_at(10) != PIXEL_OFFSET || u32_at(14) != INFO_HEADER_SIZE {
            return Err(invalid("header size"));
        }
        if u16_at(26) != 1 || u16_at(28) != 24 || u32_at(30) != 0 {
            return Err(invalid("pixel format"));
        }
        Ok(BmpHeader {
            file_size: u32_at(2),
            width: u32_at(18) as i32,
            height: u32_at(22) as i32,
            image_size: u32_at(34),
        })
    }
}

/// Complete file contents: headers then padded pixel rows
pub fn encode(rbuf: &RenderingBuffer) -> Result<Vec<u8>> {
    let header = BmpHeader::new(rbuf.width, rbuf.height)?;
    let mut out = Vec::with_capacity(header.file_size as usize);
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(rbuf.pixeldata());
    log::debug!("encoded {} bytes", out.len());
    Ok(out)
}

static TMP_SEQ: AtomicUsize = AtomicUsize::new(0);
const TMP_ATTEMPTS: usize = 64;

/// Create a new, empty file next to `path`
///
/// Named `.<name>.<pid>.<seq>.tmp`; existing files are never opened
fn create_tmp(path: &Path) -> io::Result<(PathBuf, File)> {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let name = path.file_name().unwrap_or_else(|| OsStr::new("rhomb"));
    let mut last = None;
    for _ in 0 .. TMP_ATTEMPTS {
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        let mut tmp = OsString::from(".");
        tmp.push(name);
        tmp.push(format!(".{}.{}.tmp", std::process::id(), seq));
        let tmp = dir.join(tmp);
        match OpenOptions::new().write(true).create_new(true).open(&tmp) {
            Ok(f) => return Ok((tmp, f)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => last = Some(e),
            Err(e) => return Err(e),
        }
    }
    Err(last.unwrap_or_else(|| io::Error::new(io::ErrorKind::AlreadyExists,
                                              "no free temporary file name")))
}

fn write_to(f: File, header: &BmpHeader, rbuf: &RenderingBuffer) -> io::Result<()> {
    let mut f = BufWriter::new(f);
    f.write_all(&header.to_bytes())?;
    f.write_all(rbuf.pixeldata())?;
    f.flush()
}

/// Write `rbuf` to `filename` as a bitmap
///
/// Data is written to a freshly created temporary file in the same
///   directory and renamed into place, an existing `filename` is replaced.
///   On failure the temporary file is removed and `filename` is left as
///   it was.  No other file is touched.
pub fn write_file<P: AsRef<Path>>(rbuf: &RenderingBuffer, filename: P) -> Result<()> {
    let path = filename.as_ref();
    let header = BmpHeader::new(rbuf.width, rbuf.height)?;
    let (tmp, f) = create_tmp(path)?;
    log::debug!("writing {} bytes to {}", header.file_size, tmp.display());
    if let Err(err) = write_to(f, &header, rbuf).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// Render the diamond filled with `fill` and save it to `filename`
///
/// Size limits are checked before anything is rendered or written
pub fn create_bmp<P: AsRef<Path>>(width: usize, height: usize, fill: Rgb8,
                                  filename: P, opts: &RenderOptions) -> Result<()> {
    BmpHeader::new(width, height)?;
    let rbuf = render_diamond(width, height, fill, opts)?;
    write_file(&rbuf, filename)
}

/// Decode an image file into RGB data with rows top to bottom as displayed
///
/// For a bitmap written here that is the reverse of the storage order
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Compare the decoded pixels of two image files
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::info!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
