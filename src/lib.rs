#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **[`Rgb`]**, **[`Hex`]**, **[`Hsl`]**, **[`Cmyk`]**: immutable value types, one per
//!   notation, each with a `Display` impl producing its canonical string
//! - **[`ColorSet`]**: every notation of one color, derived together
//! - **[`ColorSession`]**: holds the current color and keeps the derived set consistent
//! - **[`ColorSink`]**: trait to implement for whatever renders the color pair
//!   (page styling, terminal output, test recorders)
//! - **[`text_color`]**: WCAG contrast search for a readable foreground color
//!
//! The conversion and contrast math lives in [`convert`] and [`contrast`] and is
//! pure: same input, same output, no environment access. The session is the only
//! mutable piece, and it only talks to the outside world through its sink.

pub use palette::Srgb;

pub mod contrast;
pub mod convert;
mod math;
pub mod parse;
pub mod session;
pub mod types;

pub use contrast::{AAA_CONTRAST, adjust, blend, contrast_ratio, luminance, text_color};
pub use session::{ColorInput, ColorSession, ColorSet, ColorSink, NullSink};
pub use types::{Cmyk, Hex, HexError, Hsl, NormalizedRgb, Rgb};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
