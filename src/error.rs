//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected 4 arguments, found {0}")]
    Usage(usize),

    #[error("invalid {name}: {value:?} (expected a positive integer)")]
    InvalidDimension { name: &'static str, value: String },

    #[error("invalid color: {0:?} (expected RRGGBB or #RRGGBB)")]
    InvalidColor(String),

    #[error("invalid samples per axis: {0} (expected 1 to {})", crate::sample::MAX_SAMPLES_PER_PIXEL)]
    Samples(usize),

    #[error("image too large: {width}x{height} does not fit in a bitmap")]
    TooLarge { width: usize, height: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
