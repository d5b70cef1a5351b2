//! Coverage to color

use crate::color::Rgb8;
use crate::sample::Coverage;

/// Blend a single component from `bg` towards `fg` by `alpha`
///
/// The result is truncated towards zero, not rounded
fn blend_u8(fg: u8, bg: u8, alpha: f64) -> u8 {
    ((1.0 - alpha) * f64::from(bg) + alpha * f64::from(fg)) as u8
}

/// Blend foreground `fg` over background `bg` with coverage `alpha` in [0,1]
pub fn blend(fg: Rgb8, bg: Rgb8, alpha: f64) -> Rgb8 {
    debug_assert!(alpha >= 0.0 && alpha <= 1.0, "alpha out of range: {}", alpha);
    Rgb8::new(blend_u8(fg.r, bg.r, alpha),
              blend_u8(fg.g, bg.g, alpha),
              blend_u8(fg.b, bg.b, alpha))
}

/// Color of a pixel with coverage `c` of `fill` over a white background
///
///     use rhomb::{shade, Coverage, Rgb8};
///
///     let red = Rgb8::new(255, 0, 0);
///     assert_eq!(shade(Coverage { inside:  0, total: 16 }, red), Rgb8::white());
///     assert_eq!(shade(Coverage { inside: 16, total: 16 }, red), red);
///     assert_eq!(shade(Coverage { inside: 10, total: 16 }, red), Rgb8::new(255, 95, 95));
///
pub fn shade(c: Coverage, fill: Rgb8) -> Rgb8 {
    if c.is_empty() {
        return Rgb8::white();
    }
    blend(fill, Rgb8::white(), c.fraction())
}
