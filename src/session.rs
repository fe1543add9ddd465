//! Color session: owns the current color and its derived notations.
//!
//! Provides [`ColorSession`], which holds one current color and keeps every
//! notation of it consistent, and the [`ColorSink`] trait through which the
//! surrounding application (a view layer, a URL synchronizer) observes
//! color changes. The session itself never touches the environment.

use crate::types::{Cmyk, Hex, Hsl, NormalizedRgb, Rgb};
use crate::{contrast, convert, parse};
use palette::Srgb;

/// Trait for collaborators that render or record the current color.
///
/// Implement this for whatever applies the color pair to the environment
/// (page styling, terminal escape codes, a recording buffer in tests).
pub trait ColorSink {
    /// Applies the current background and text colors.
    ///
    /// Called after every successful set operation, including the initial
    /// one. Handle any presentation errors internally; this method cannot
    /// fail.
    fn apply(&mut self, background: Hex, foreground: Hex);

    /// Notified when the session generates a fresh random color.
    ///
    /// Default is a no-op; analytics-style collaborators can override it.
    fn color_generated(&mut self, _color: Hex) {}
}

/// Sink that ignores every notification.
pub struct NullSink;

impl ColorSink for NullSink {
    fn apply(&mut self, _background: Hex, _foreground: Hex) {}
}

/// A color in one of the supported notations, as free-form text.
#[derive(Debug, Clone, Copy)]
pub enum ColorInput<'a> {
    /// Hex notation, `#` optional, 3 or 6 digits.
    Hex(&'a str),
    /// 8-bit RGB components.
    Rgb(&'a str),
    /// RGB components in the 0-1 range.
    NormalizedRgb(&'a str),
    /// Hue degrees plus saturation/lightness percents.
    Hsl(&'a str),
    /// CMYK percents.
    Cmyk(&'a str),
}

/// Every notation of a single color, derived together.
///
/// Produced atomically by [`ColorSet::derive`]: each field is the exact
/// conversion of `hex`, never a partial update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSet {
    /// Canonical hex form.
    pub hex: Hex,
    /// 8-bit RGB.
    pub rgb: Rgb,
    /// RGB in the 0-1 range.
    pub normalized: Srgb<f32>,
    /// HSL degrees/percents.
    pub hsl: Hsl,
    /// CMYK percents.
    pub cmyk: Cmyk,
    /// Readable foreground color for text shown over this color.
    pub text_color: Hex,
}

impl ColorSet {
    /// Derives every notation of `hex` in one step.
    pub fn derive(hex: Hex) -> Self {
        let rgb = hex.to_rgb();
        Self {
            hex,
            rgb,
            normalized: rgb.normalized(),
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
            text_color: contrast::text_color(rgb).to_hex(),
        }
    }
}

/// Holds the current color and keeps all derived notations consistent.
///
/// Each session owns one sink and exactly one current color. Every set
/// operation recomputes the whole [`ColorSet`] and applies the sink, so
/// observers never see a half-updated bundle.
pub struct ColorSession<S: ColorSink> {
    sink: S,
    colors: ColorSet,
}

impl<S: ColorSink> ColorSession<S> {
    /// Creates a session with an explicit initial color.
    pub fn new(mut sink: S, initial: Hex) -> Self {
        let colors = ColorSet::derive(initial);
        sink.apply(colors.hex, colors.text_color);
        Self { sink, colors }
    }

    /// Creates a session with a freshly generated random color.
    #[cfg(feature = "std")]
    pub fn with_random(sink: S) -> Self {
        Self::new(sink, Hex::random())
    }

    /// Creates a session by resolving the initial color in priority order:
    /// explicit argument, then a value recovered from the environment
    /// (query parameter, cached page state), then random.
    ///
    /// Candidates must pass strict hex validation to be used.
    #[cfg(feature = "std")]
    pub fn initialize(sink: S, explicit: Option<&str>, recovered: Option<&str>) -> Self {
        let initial = explicit
            .and_then(|text| text.parse().ok())
            .or_else(|| recovered.and_then(|text| text.parse().ok()));
        match initial {
            Some(hex) => Self::new(sink, hex),
            None => Self::with_random(sink),
        }
    }

    /// Sets the current color from any notation, dispatching on the input.
    pub fn set(&mut self, input: ColorInput<'_>) {
        match input {
            ColorInput::Hex(text) => self.set_hex(text),
            ColorInput::Rgb(text) => self.set_rgb(text),
            ColorInput::NormalizedRgb(text) => self.set_normalized_rgb(text),
            ColorInput::Hsl(text) => self.set_hsl(text),
            ColorInput::Cmyk(text) => self.set_cmyk(text),
        }
    }

    /// Sets the current color from a hex string (lossy parse).
    pub fn set_hex(&mut self, text: &str) {
        self.regenerate(Hex::parse_lossy(text));
    }

    /// Sets the current color from free-form RGB text.
    ///
    /// Missing components default to 0; out-of-range components saturate.
    pub fn set_rgb(&mut self, text: &str) {
        let [r, g, b] = parse::numbers(text);
        self.regenerate(convert::rgb(r, g, b).to_hex());
    }

    /// Sets the current color from free-form normalized (0-1) RGB text.
    pub fn set_normalized_rgb(&mut self, text: &str) {
        let [r, g, b] = parse::numbers(text);
        self.regenerate(Rgb::from_normalized(Srgb::new(r, g, b)).to_hex());
    }

    /// Sets the current color from free-form HSL text.
    pub fn set_hsl(&mut self, text: &str) {
        let [h, s, l] = parse::numbers(text);
        self.regenerate(convert::hsl(h, s, l).to_hex());
    }

    /// Sets the current color from free-form CMYK text.
    pub fn set_cmyk(&mut self, text: &str) {
        let [c, m, y, k] = parse::numbers(text);
        self.regenerate(convert::cmyk(c, m, y, k).to_hex());
    }

    /// Replaces the current color with a random one.
    ///
    /// Fires the sink's `color_generated` hook and returns the new color.
    #[cfg(feature = "std")]
    pub fn randomize(&mut self) -> Hex {
        let hex = Hex::random();
        self.regenerate(hex);
        self.sink.color_generated(hex);
        hex
    }

    /// The full derived bundle for the current color.
    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Canonical hex form of the current color.
    pub fn hex(&self) -> Hex {
        self.colors.hex
    }

    /// 8-bit RGB form of the current color.
    pub fn rgb(&self) -> Rgb {
        self.colors.rgb
    }

    /// Normalized RGB form, ready for display.
    pub fn normalized_rgb(&self) -> NormalizedRgb {
        NormalizedRgb(self.colors.normalized)
    }

    /// HSL form of the current color.
    pub fn hsl(&self) -> Hsl {
        self.colors.hsl
    }

    /// CMYK form of the current color.
    pub fn cmyk(&self) -> Cmyk {
        self.colors.cmyk
    }

    /// Readable text color for the current color.
    pub fn text_color(&self) -> Hex {
        self.colors.text_color
    }

    /// Consumes the session and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Recomputes the bundle and notifies the sink.
    fn regenerate(&mut self, hex: Hex) {
        self.colors = ColorSet::derive(hex);
        self.sink.apply(self.colors.hex, self.colors.text_color);
    }
}
