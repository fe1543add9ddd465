//! Conversions between color notations.
//!
//! All conversions are pure and total. The free functions at the bottom
//! ([`rgb`], [`hsl`], [`cmyk`]) take raw real components and saturate them
//! into range, which is what free-text input needs; the typed methods are
//! thin wrappers over the same math.

use crate::math;
use crate::types::{Cmyk, Hex, Hsl, Rgb};
use palette::Srgb;

impl Hex {
    /// Unpacks into 8-bit RGB channels.
    #[inline]
    pub const fn to_rgb(self) -> Rgb {
        let value = self.value();
        Rgb::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

impl Rgb {
    /// Bit-packs the channels into a hex color.
    #[inline]
    pub const fn to_hex(self) -> Hex {
        Hex::new(((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32)
    }

    /// Converts to HSL with integer degree/percent components.
    ///
    /// Achromatic colors (all channels equal) get hue 0 and saturation 0.
    /// Hue is reduced to `[0, 360)`, so a hue that rounds to 360 reads as 0.
    pub fn to_hsl(self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let mut h = 0.0;
        let mut s = 0.0;
        if max != min {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            // Hue branch picks the max channel, ties broken in R, G, B order.
            h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h /= 6.0;
        }

        Hsl::new(
            math::round(h * 360.0) as u16 % 360,
            math::percent(s * 100.0),
            math::percent(l * 100.0),
        )
    }

    /// Converts to CMYK percentages.
    ///
    /// Pure black is special-cased to `cmyk(0,0,0,100)` so the chroma
    /// channels never divide by zero.
    pub fn to_cmyk(self) -> Cmyk {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
        if k == 1.0 {
            return Cmyk::new(0, 0, 0, 100);
        }

        Cmyk::new(
            math::percent((1.0 - r - k) / (1.0 - k) * 100.0),
            math::percent((1.0 - g - k) / (1.0 - k) * 100.0),
            math::percent((1.0 - b - k) / (1.0 - k) * 100.0),
            math::percent(k * 100.0),
        )
    }

    /// Converts the channels to the normalized 0-1 range.
    #[inline]
    pub fn normalized(self) -> Srgb<f32> {
        self.to_srgb().into_format()
    }

    /// Converts normalized 0-1 components back to 8-bit channels.
    ///
    /// Out-of-range components saturate.
    #[inline]
    pub fn from_normalized(color: Srgb<f32>) -> Self {
        Self::new(
            math::channel(color.red * 255.0),
            math::channel(color.green * 255.0),
            math::channel(color.blue * 255.0),
        )
    }
}

impl Hsl {
    /// Converts to 8-bit RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl(f32::from(self.h), f32::from(self.s), f32::from(self.l))
    }
}

impl Cmyk {
    /// Converts to 8-bit RGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        cmyk(
            f32::from(self.c),
            f32::from(self.m),
            f32::from(self.y),
            f32::from(self.k),
        )
    }
}

/// Creates an RGB color from raw real channels, rounding and saturating.
#[inline]
pub fn rgb(r: f32, g: f32, b: f32) -> Rgb {
    Rgb::new(math::channel(r), math::channel(g), math::channel(b))
}

/// Creates an RGB color from HSL components.
///
/// Hue may be any real number of degrees; hues at or above 360 wrap, and
/// other out-of-range components produce a defined (if nonsensical) color
/// rather than an error. Saturation and lightness are percents.
pub fn hsl(h: f32, s: f32, l: f32) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;
    let k = |n: f32| (n + h / 30.0) % 12.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f32| l - a * (-1.0f32).max((k(n) - 3.0).min((9.0 - k(n)).min(1.0)));

    rgb(f(0.0) * 255.0, f(8.0) * 255.0, f(4.0) * 255.0)
}

/// Creates an RGB color from CMYK percent components.
pub fn cmyk(c: f32, m: f32, y: f32, k: f32) -> Rgb {
    let k = k / 100.0;
    rgb(
        255.0 * (1.0 - c / 100.0) * (1.0 - k),
        255.0 * (1.0 - m / 100.0) * (1.0 - k),
        255.0 * (1.0 - y / 100.0) * (1.0 - k),
    )
}
