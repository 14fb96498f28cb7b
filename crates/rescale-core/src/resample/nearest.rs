//! Nearest-neighbor reconstruction: no interpolation, O(1) per pixel.

use crate::buffer::{PixelBuffer, CHANNELS};

use super::source_center;

/// Resize by snapping each output pixel to the nearest source sample.
///
/// Uses the same half-pixel center mapping as the interpolating kernels so
/// that all four algorithms sample the same continuous coordinate, then
/// rounds it to the nearest integer sample, clamped to the buffer edges.
pub(crate) fn resize(src: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let scale_x = src.width() as f32 / width as f32;
    let scale_y = src.height() as f32 / height as f32;

    let xs: Vec<i64> = (0..width)
        .map(|x| source_center(x, scale_x).round() as i64)
        .collect();

    let mut samples = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height {
        let sy = source_center(y, scale_y).round() as i64;
        for &sx in &xs {
            for channel in 0..CHANNELS {
                samples.push(src.sample_clamped(sx, sy, channel));
            }
        }
    }

    PixelBuffer::from_resampled(width, height, samples)
}
