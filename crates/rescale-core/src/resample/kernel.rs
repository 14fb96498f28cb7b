//! Kernel weight functions for the separable resamplers.
//!
//! A kernel maps a fractional sample offset to an interpolation weight. The
//! cubic and Lanczos kernels have negative lobes, so convolved values can
//! overshoot `[0, 255]` and are clamped after accumulation.

use std::f32;

/// Tap radius of the Catmull-Rom cubic kernel (4x4 neighborhood).
pub(crate) const CUBIC_SUPPORT: f32 = 2.0;

/// Tap radius of the Lanczos3 kernel (6-wide neighborhood per axis).
pub(crate) const LANCZOS_SUPPORT: f32 = 3.0;

/// Catmull-Rom/Keys cubic kernel with `a = -0.5`.
#[inline]
pub(crate) fn catmull_rom(t: f32) -> f32 {
    const A: f32 = -0.5;
    let t = t.abs();
    if t <= 1.0 {
        (A + 2.0) * t.powi(3) - (A + 3.0) * t.powi(2) + 1.0
    } else if t < 2.0 {
        A * t.powi(3) - 5.0 * A * t.powi(2) + 8.0 * A * t - 4.0 * A
    } else {
        0.0
    }
}

/// Normalized sinc, `sin(pi t) / (pi t)` with `sinc(0) = 1`.
#[inline]
pub(crate) fn sinc(t: f32) -> f32 {
    if t == 0.0 {
        1.0
    } else {
        let a = t * f32::consts::PI;
        a.sin() / a
    }
}

/// Lanczos windowed sinc with `a = 3`: `sinc(t) * sinc(t/3)` for `|t| < 3`.
#[inline]
pub(crate) fn lanczos3(t: f32) -> f32 {
    if t.abs() < LANCZOS_SUPPORT {
        sinc(t) * sinc(t / LANCZOS_SUPPORT)
    } else {
        0.0
    }
}
