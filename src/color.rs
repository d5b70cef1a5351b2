//! Colors

use crate::error::Error;

use std::str::FromStr;

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Components in the order they are stored in a bitmap: Blue, Green, Red
    pub fn bgr(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
    /// Create a color from components stored as Blue, Green, Red
    pub fn from_bgr(v: &[u8]) -> Self {
        Self::new(v[2], v[1], v[0])
    }
}

/// Parse `RRGGBB` hex, with an optional leading `#`
///
///     use rhomb::Rgb8;
///
///     assert_eq!("#FF0000".parse::<Rgb8>().unwrap(), Rgb8::new(255,0,0));
///     assert_eq!("10a0Fe".parse::<Rgb8>().unwrap(), Rgb8::new(0x10,0xa0,0xfe));
///     assert!("#F00".parse::<Rgb8>().is_err());
///     assert!("GG0000".parse::<Rgb8>().is_err());
///
impl FromStr for Rgb8 {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || ! hex.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i .. i+2], 16)
            .map_err(|_| Error::InvalidColor(s.to_string()));
        Ok(Rgb8::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!("000000".parse::<Rgb8>().unwrap(), Rgb8::black());
        assert_eq!("#ffffff".parse::<Rgb8>().unwrap(), Rgb8::white());
        assert_eq!("#123456".parse::<Rgb8>().unwrap(), Rgb8::new(0x12,0x34,0x56));
    }
    #[test]
    fn parse_rejects() {
        for s in ["", "#", "12345", "1234567", "##123456", "12 456", "+12345", "éé1234"].iter() {
            match s.parse::<Rgb8>() {
                Err(Error::InvalidColor(v)) => assert_eq!(&v, s),
                other => panic!("{:?} parsed as {:?}", s, other),
            }
        }
    }
    #[test]
    fn bgr_order() {
        let c = Rgb8::new(1,2,3);
        assert_eq!(c.bgr(), [3,2,1]);
        assert_eq!(Rgb8::from_bgr(&c.bgr()), c);
    }
}
