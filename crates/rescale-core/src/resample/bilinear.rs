//! Bilinear reconstruction: blend of the four surrounding source samples.

use crate::buffer::{PixelBuffer, CHANNELS};

use super::source_center;

/// Resize by bilinear interpolation, applied independently per channel.
///
/// For each output pixel the continuous source coordinate is
/// `(sx, sy) = ((x + 0.5) * scale_x - 0.5, (y + 0.5) * scale_y - 0.5)`; the
/// four surrounding samples are blended with weights `(1-fx)(1-fy)`,
/// `fx(1-fy)`, `(1-fx)fy`, `fx*fy` from the fractional parts, with taps
/// clamped to the buffer edges.
pub(crate) fn resize(src: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let scale_x = src.width() as f32 / width as f32;
    let scale_y = src.height() as f32 / height as f32;

    // Horizontal tap positions and fractions are identical for every row.
    let xs: Vec<(i64, f32)> = (0..width)
        .map(|x| {
            let sx = source_center(x, scale_x);
            let x0 = sx.floor();
            (x0 as i64, sx - x0)
        })
        .collect();

    let mut samples = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height {
        let sy = source_center(y, scale_y);
        let y0f = sy.floor();
        let y0 = y0f as i64;
        let fy = sy - y0f;

        for &(x0, fx) in &xs {
            for channel in 0..CHANNELS {
                let p00 = src.sample_clamped(x0, y0, channel) as f32;
                let p10 = src.sample_clamped(x0 + 1, y0, channel) as f32;
                let p01 = src.sample_clamped(x0, y0 + 1, channel) as f32;
                let p11 = src.sample_clamped(x0 + 1, y0 + 1, channel) as f32;

                let value = p00 * (1.0 - fx) * (1.0 - fy)
                    + p10 * fx * (1.0 - fy)
                    + p01 * (1.0 - fx) * fy
                    + p11 * fx * fy;
                samples.push(value.round().clamp(0.0, 255.0) as u8);
            }
        }
    }

    PixelBuffer::from_resampled(width, height, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_exact() {
        // At identity scale the fractional parts are zero, so the blend
        // degenerates to the original sample.
        let src = PixelBuffer::from_raw(4, 3, (0..36).collect()).unwrap();
        let out = resize(&src, 4, 3);
        assert_eq!(out.samples(), src.samples());
    }

    #[test]
    fn test_upscale_midpoint_averages_neighbors() {
        // Two-pixel row 0..100, doubled: the inner pixels land at
        // sx = 0.25 and 0.75 between the two samples.
        let src = PixelBuffer::from_raw(2, 1, vec![0, 0, 0, 100, 100, 100]).unwrap();
        let out = resize(&src, 4, 1);
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(1, 0), [25, 25, 25]);
        assert_eq!(out.pixel(2, 0), [75, 75, 75]);
        assert_eq!(out.pixel(3, 0), [100, 100, 100]);
    }

    #[test]
    fn test_uniform_source_stays_uniform() {
        let src = PixelBuffer::filled(5, 5, [77, 88, 99]);
        let out = resize(&src, 13, 7);
        for y in 0..7 {
            for x in 0..13 {
                assert_eq!(out.pixel(x, y), [77, 88, 99]);
            }
        }
    }
}
