//! Two-pass separable convolution driver shared by bicubic and Lanczos.
//!
//! The 2D interpolation is split into a horizontal pass producing an f32
//! intermediate raster and a vertical pass producing the final 8-bit output.
//! Weights for each output coordinate are precomputed once per axis.

use crate::buffer::{PixelBuffer, CHANNELS};

use super::source_center;

/// Precomputed filter taps for one output coordinate.
struct Taps {
    /// Source index of the first tap (may fall outside the buffer; taps are
    /// clamped to the edge when sampling)
    start: i64,
    weights: Vec<f32>,
}

/// Build the tap table for one axis.
///
/// Weights are normalized to sum to 1: the Lanczos window does not sum to
/// exactly one at fractional offsets, and normalizing keeps flat regions flat.
fn build_taps(src_len: u32, dst_len: u32, kernel: fn(f32) -> f32, support: f32) -> Vec<Taps> {
    let scale = src_len as f32 / dst_len as f32;
    (0..dst_len)
        .map(|d| {
            let center = source_center(d, scale);
            let start = (center - support).ceil() as i64;
            let end = (center + support).floor() as i64;

            let mut weights = Vec::with_capacity((end - start + 1).max(0) as usize);
            let mut sum = 0.0f32;
            for i in start..=end {
                let w = kernel(i as f32 - center);
                sum += w;
                weights.push(w);
            }
            if sum != 0.0 {
                for w in &mut weights {
                    *w /= sum;
                }
            }
            Taps { start, weights }
        })
        .collect()
}

/// Resize with a separable kernel: rows first, then columns.
///
/// Accumulation is in f32 throughout; the final per-channel value rounds to
/// nearest and clamps to `[0, 255]`, since both kernels have negative lobes
/// that can overshoot or undershoot the sample range.
pub(crate) fn resize(
    src: &PixelBuffer,
    width: u32,
    height: u32,
    kernel: fn(f32) -> f32,
    support: f32,
) -> PixelBuffer {
    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let dst_w = width as usize;
    let dst_h = height as usize;

    // Horizontal pass: (src_w x src_h) -> (dst_w x src_h), f32.
    let xtaps = build_taps(src.width(), width, kernel, support);
    let samples = src.samples();
    let mut mid = vec![0.0f32; dst_w * src_h * CHANNELS];
    for y in 0..src_h {
        let row = &samples[y * src_w * CHANNELS..(y + 1) * src_w * CHANNELS];
        for (x, taps) in xtaps.iter().enumerate() {
            let mut acc = [0.0f32; CHANNELS];
            for (k, &w) in taps.weights.iter().enumerate() {
                let sx = (taps.start + k as i64).clamp(0, src_w as i64 - 1) as usize;
                for (channel, a) in acc.iter_mut().enumerate() {
                    *a += w * row[sx * CHANNELS + channel] as f32;
                }
            }
            let out = (y * dst_w + x) * CHANNELS;
            mid[out..out + CHANNELS].copy_from_slice(&acc);
        }
    }

    // Vertical pass: (dst_w x src_h) -> (dst_w x dst_h), rounded to u8.
    let ytaps = build_taps(src.height(), height, kernel, support);
    let mut out = Vec::with_capacity(dst_w * dst_h * CHANNELS);
    for taps in &ytaps {
        for x in 0..dst_w {
            let mut acc = [0.0f32; CHANNELS];
            for (k, &w) in taps.weights.iter().enumerate() {
                let sy = (taps.start + k as i64).clamp(0, src_h as i64 - 1) as usize;
                let idx = (sy * dst_w + x) * CHANNELS;
                for (channel, a) in acc.iter_mut().enumerate() {
                    *a += w * mid[idx + channel];
                }
            }
            for value in acc {
                out.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    PixelBuffer::from_resampled(width, height, out)
}
