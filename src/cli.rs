//! Command line arguments

use crate::color::Rgb8;
use crate::error::{Error, Result};

use std::path::PathBuf;

/// Usage message for program `progname`
pub fn usage(progname: &str) -> String {
    format!("Usage: {} <width> <height> <color_hex> <output_filename>", progname)
}

/// Positional arguments: width, height, color and output file
#[derive(Debug,Clone,PartialEq)]
pub struct Args {
    pub width: usize,
    pub height: usize,
    pub color: Rgb8,
    pub filename: PathBuf,
}

fn dimension(name: &'static str, s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::InvalidDimension { name, value: s.to_string() }),
    }
}

impl Args {
    /// Parse arguments, not including the program name
    ///
    ///     use rhomb::{Args, Rgb8};
    ///
    ///     let v : Vec<String> = ["4", "3", "#00ff00", "out.bmp"].iter().map(|s| s.to_string()).collect();
    ///     let args = Args::parse(&v).unwrap();
    ///     assert_eq!((args.width, args.height), (4, 3));
    ///     assert_eq!(args.color, Rgb8::new(0, 255, 0));
    ///
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Args> {
        if args.len() != 4 {
            return Err(Error::Usage(args.len()));
        }
        let width  = dimension("width",  args[0].as_ref())?;
        let height = dimension("height", args[1].as_ref())?;
        let color  = args[2].as_ref().parse::<Rgb8>()?;
        let filename = PathBuf::from(args[3].as_ref());
        Ok(Args { width, height, color, filename })
    }
}
