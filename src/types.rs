//! Color value types and their canonical string forms.

use crate::math;
use core::fmt;
use core::str::FromStr;
use palette::Srgb;

/// An 8-bit sRGB color triple.
///
/// This is the interchange type of the crate: every notation converts
/// through it. Channels are `u8`, so values outside 0-255 cannot exist;
/// free-text input is saturated into range at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates an RGB color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to a `palette` color for interpolation or format changes.
    #[inline]
    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    #[inline]
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    #[inline]
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// A color packed as a 24-bit `0xRRGGBB` value.
///
/// The canonical string form is a leading `#` followed by six uppercase
/// hex digits. Parsing accepts the 3-digit shorthand and a missing `#`;
/// the shorthand expands each digit (`F00` becomes `FF0000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hex(u32);

impl Hex {
    /// Creates a hex color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are discarded.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Parses a hex string without failing.
    ///
    /// Strips a leading `#`, expands the 3-digit shorthand, then folds hex
    /// digits until the first invalid character, like an integer parse with
    /// radix 16. Malformed input degrades to a numeric fallback (an empty
    /// digit prefix reads as 0) rather than an error; callers that need to
    /// trust the result should validate with [`str::parse`] first.
    pub fn parse_lossy(text: &str) -> Self {
        let digits = text.strip_prefix('#').unwrap_or(text);

        if digits.len() == 3 {
            // Expand shorthand before folding so `F00` reads as `FF0000`.
            let mut value: u32 = 0;
            for c in digits.bytes() {
                let Some(n) = nibble(c) else { break };
                value = (value << 8) | (u32::from(n) * 0x11);
            }
            return Self::new(value);
        }

        let mut value: u32 = 0;
        for c in digits.bytes() {
            let Some(n) = nibble(c) else { break };
            value = value.wrapping_shl(4) | u32::from(n);
        }
        Self::new(value)
    }

    /// Generates a random color, uniform over the full 24-bit range.
    #[cfg(feature = "std")]
    pub fn random() -> Self {
        use rand::Rng;
        Self::new(rand::rng().random_range(0..=0xFF_FFFF))
    }
}

impl FromStr for Hex {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => {
                let mut value: u32 = 0;
                for &c in bytes {
                    let n = nibble(c).ok_or(HexError::InvalidDigit)?;
                    value = (value << 8) | (u32::from(n) * 0x11);
                }
                Ok(Self::new(value))
            }
            6 => {
                let mut value: u32 = 0;
                for &c in bytes {
                    let n = nibble(c).ok_or(HexError::InvalidDigit)?;
                    value = (value << 4) | u32::from(n);
                }
                Ok(Self::new(value))
            }
            _ => Err(HexError::InvalidLength),
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Decodes a single ASCII hex digit.
#[inline]
const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Strict hex parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// Not 3 or 6 digits after the optional `#`.
    InvalidLength,

    /// A character outside `[0-9A-Fa-f]`.
    InvalidDigit,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexError::InvalidLength => {
                write!(f, "hex color must have 3 or 6 digits")
            }
            HexError::InvalidDigit => {
                write!(f, "hex color contains a non-hex digit")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

/// A color in HSL notation: hue in degrees, saturation and lightness as
/// percentages.
///
/// Hue is canonically in `[0, 360)`; conversions reduce 360 to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Creates an HSL color from hue degrees and percent components.
    #[inline]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.h, self.s, self.l)
    }
}

/// A color in CMYK notation, each component a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl Cmyk {
    /// Creates a CMYK color from percent components.
    #[inline]
    pub const fn new(c: u8, m: u8, y: u8, k: u8) -> Self {
        Self { c, m, y, k }
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({},{},{},{})", self.c, self.m, self.y, self.k)
    }
}

/// Display wrapper for RGB in the normalized 0-1 range.
///
/// Components print rounded to two decimals with trailing zeros trimmed:
/// `rgb(1,0.5,0.47)` rather than `rgb(1.00,0.50,0.47)`. This form is for
/// display only; it does not round-trip at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRgb(pub Srgb<f32>);

impl fmt::Display for NormalizedRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb(")?;
        write_component(f, self.0.red)?;
        write!(f, ",")?;
        write_component(f, self.0.green)?;
        write!(f, ",")?;
        write_component(f, self.0.blue)?;
        write!(f, ")")
    }
}

/// Writes a 0-1 component as a trimmed 2-decimal number.
fn write_component(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    let hundredths = math::round(value.clamp(0.0, 1.0) * 100.0) as u16;
    if hundredths % 100 == 0 {
        write!(f, "{}", hundredths / 100)
    } else if hundredths % 10 == 0 {
        write!(f, "{}.{}", hundredths / 100, (hundredths % 100) / 10)
    } else {
        write!(f, "{}.{:02}", hundredths / 100, hundredths % 100)
    }
}
