//! Float helpers that work without `std`.
//!
//! `f32::round` and `f32::powf` live in `std`, not `core`, so the numeric
//! core routes through `libm` (already in the tree via `palette`).

/// Rounds to the nearest integer, halves away from zero.
#[inline]
pub(crate) fn round(x: f32) -> f32 {
    libm::roundf(x)
}

/// Raises `base` to a real power.
#[inline]
pub(crate) fn powf(base: f32, exp: f32) -> f32 {
    libm::powf(base, exp)
}

/// Rounds a real channel value into the 8-bit range.
///
/// Saturates outside [0, 255]; NaN reads as 0.
#[inline]
pub(crate) fn channel(x: f32) -> u8 {
    round(x).clamp(0.0, 255.0) as u8
}

/// Rounds a real percentage into [0, 100].
#[inline]
pub(crate) fn percent(x: f32) -> u8 {
    round(x).clamp(0.0, 100.0) as u8
}
