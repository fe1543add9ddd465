//! Integration tests for WCAG contrast math and text-color selection

mod common;
use common::hex;

use swatch::{
    AAA_CONTRAST, BLACK, WHITE, adjust, blend, contrast_ratio, luminance, text_color, Rgb,
};

#[test]
fn luminance_extremes() {
    assert!(luminance(BLACK).abs() < 1e-6);
    assert!((luminance(WHITE) - 1.0).abs() < 1e-4);
}

#[test]
fn luminance_weights_green_heaviest() {
    let red = luminance(Rgb::new(255, 0, 0));
    let green = luminance(Rgb::new(0, 255, 0));
    let blue = luminance(Rgb::new(0, 0, 255));
    assert!(green > red && red > blue);
    assert!((red - 0.2126).abs() < 1e-4);
    assert!((green - 0.7152).abs() < 1e-4);
    assert!((blue - 0.0722).abs() < 1e-4);
}

#[test]
fn contrast_ratio_black_on_white_is_21() {
    assert!((contrast_ratio(BLACK, WHITE) - 21.0).abs() < 0.01);
}

#[test]
fn contrast_ratio_is_symmetric() {
    let a = Rgb::new(12, 200, 56);
    let b = Rgb::new(250, 40, 128);
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    assert!((contrast_ratio(a, a) - 1.0).abs() < 1e-6);
}

#[test]
fn adjust_scales_and_saturates() {
    // Darkening white by 50% lands on mid gray.
    assert_eq!(adjust(WHITE, -0.5), Rgb::new(128, 128, 128));
    // Black has nothing to scale.
    assert_eq!(adjust(BLACK, 0.8), BLACK);
    // Lightening past the channel ceiling saturates.
    assert_eq!(adjust(Rgb::new(200, 100, 10), 0.5), Rgb::new(255, 150, 15));
    assert_eq!(adjust(WHITE, 0.3), WHITE);
}

#[test]
fn blend_interpolates_channels() {
    assert_eq!(blend(BLACK, WHITE, 0.5), Rgb::new(128, 128, 128));
    assert_eq!(blend(BLACK, WHITE, 0.0), BLACK);
    assert_eq!(blend(BLACK, WHITE, 1.0), WHITE);
    assert_eq!(
        blend(Rgb::new(100, 0, 200), Rgb::new(200, 100, 0), 0.25),
        Rgb::new(125, 25, 150)
    );
}

#[test]
fn text_color_for_black_meets_aaa() {
    let background = hex("#000000").to_rgb();
    let foreground = text_color(background);
    assert!(contrast_ratio(background, foreground) >= AAA_CONTRAST);
    // The white-derived family wins against black.
    assert_eq!(foreground, WHITE);
}

#[test]
fn text_color_for_white_meets_aaa() {
    let background = hex("#FFFFFF").to_rgb();
    let foreground = text_color(background);
    assert!(contrast_ratio(background, foreground) >= AAA_CONTRAST);
    assert_eq!(foreground, BLACK);
}

#[test]
fn text_color_meets_aaa_on_dark_background() {
    // Against a dark blue, several light shades clear 7.0.
    let background = hex("#00007F").to_rgb();
    let foreground = text_color(background);
    let ratio = contrast_ratio(background, foreground);
    assert!(ratio >= AAA_CONTRAST);
}

#[test]
fn text_color_falls_back_to_best_available() {
    // Mid gray can't reach 7.0 against anything; the best candidate is black.
    let background = Rgb::new(119, 119, 119);
    let foreground = text_color(background);
    assert!(contrast_ratio(background, foreground) < AAA_CONTRAST);
    assert_eq!(foreground, BLACK);
}

#[test]
fn text_color_always_returns_something_readable_enough() {
    // Sweep a slice of the cube: the result is always the best on offer.
    for value in (0u8..=255).step_by(15) {
        let background = Rgb::new(value, value.wrapping_mul(3), 255 - value);
        let foreground = text_color(background);
        let chosen = contrast_ratio(background, foreground);
        let against_black = contrast_ratio(background, BLACK);
        let against_white = contrast_ratio(background, WHITE);
        // No candidate beats both extremes, so the chosen ratio can't be
        // worse than whichever extreme is weaker than it.
        assert!(chosen >= against_black.min(against_white));
    }
}
