//! WCAG contrast math and readable text-color selection.

use crate::types::Rgb;
use crate::{BLACK, WHITE, math};
use heapless::Vec;
use palette::Mix;

/// WCAG "AAA" contrast ratio threshold for normal text.
pub const AAA_CONTRAST: f32 = 7.0;

/// Candidate shades tested per direction (black upward, white downward).
const SHADES_PER_DIRECTION: usize = 11;

/// Computes the relative luminance of a color per WCAG 2.1.
///
/// Each channel is gamma-corrected, then weighted 0.2126/0.7152/0.0722.
/// Returns a value in `[0.0, 1.0]`.
pub fn luminance(color: Rgb) -> f32 {
    fn linearize(channel: u8) -> f32 {
        let v = f32::from(channel) / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            math::powf((v + 0.055) / 1.055, 2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Computes the WCAG contrast ratio between two colors.
///
/// Returns a value in `[1.0, 21.0]`, independent of argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f32 {
    let la = luminance(a);
    let lb = luminance(b);
    let brightest = la.max(lb);
    let darkest = la.min(lb);
    (brightest + 0.05) / (darkest + 0.05)
}

/// Lightens (positive percent) or darkens (negative percent) a color.
///
/// Each channel becomes `round(v + v * percent)`, saturated to 0-255.
pub fn adjust(color: Rgb, percent: f32) -> Rgb {
    let scale = |v: u8| math::channel(f32::from(v) + f32::from(v) * percent);
    Rgb::new(scale(color.r), scale(color.g), scale(color.b))
}

/// Blends `from` toward `to` by `amount` in `[0.0, 1.0]`.
pub fn blend(from: Rgb, to: Rgb, amount: f32) -> Rgb {
    Rgb::from_normalized(from.normalized().mix(to.normalized(), amount))
}

/// Ratio of one candidate shade against the background.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    color: Rgb,
    ratio: f32,
}

/// Picks a readable text color for the given background.
///
/// Tests 11 shades stepping up from black and 11 stepping down from white
/// (10% luminance adjustment per step), ranks all 22 by contrast ratio
/// against the background, and returns the first one meeting the AAA
/// threshold of 7.0. If no shade reaches it, the single highest-contrast
/// shade wins, so a color is always returned.
pub fn text_color(background: Rgb) -> Rgb {
    let mut candidates: Vec<Candidate, { SHADES_PER_DIRECTION * 2 }> = Vec::new();

    let mut test_shades = |base: Rgb, direction: f32| {
        for i in 0..SHADES_PER_DIRECTION {
            let shade = adjust(base, i as f32 * direction * 0.1);
            let _ = candidates.push(Candidate {
                color: shade,
                ratio: contrast_ratio(background, shade),
            });
        }
    };

    test_shades(BLACK, 1.0);
    test_shades(WHITE, -1.0);

    candidates.sort_unstable_by(|a, b| {
        b.ratio
            .partial_cmp(&a.ratio)
            .unwrap_or(core::cmp::Ordering::Equal)
    });

    candidates
        .iter()
        .find(|candidate| candidate.ratio >= AAA_CONTRAST)
        .unwrap_or(&candidates[0])
        .color
}
