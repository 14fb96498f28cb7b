//! Image decode/encode — the codec boundary around the core.
//!
//! The core only ever sees decoded `PixelBuffer`s; malformed image bytes are
//! caught here. Encoding mirrors the original save behavior: format inferred
//! from the output extension, JPEG when it is missing or unknown.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat};
use rescale_core::PixelBuffer;
use thiserror::Error;

/// Errors at the codec boundary.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Image encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Decode an image file (JPEG/PNG/BMP/GIF/...) into an RGB pixel buffer.
///
/// Format is detected from content. Alpha channels are dropped; the core
/// works on interleaved RGB8 only.
pub fn decode(path: &Path) -> Result<PixelBuffer, CodecError> {
    let image = image::open(path).map_err(|e| CodecError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    PixelBuffer::from_raw(width, height, rgb.into_raw()).map_err(|e| CodecError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Encode a pixel buffer to `path`.
///
/// The format follows the file extension and defaults to JPEG;
/// `jpeg_quality` applies only to JPEG output.
pub fn encode(buffer: &PixelBuffer, path: &Path, jpeg_quality: u8) -> Result<(), CodecError> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Jpeg);
    let encode_err = |e: String| CodecError::Encode {
        path: path.to_path_buf(),
        message: e,
    };

    if format == ImageFormat::Jpeg {
        let file = File::create(path).map_err(|e| encode_err(e.to_string()))?;
        let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), jpeg_quality);
        encoder
            .write_image(
                buffer.samples(),
                buffer.width(),
                buffer.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| encode_err(e.to_string()))
    } else {
        image::save_buffer_with_format(
            path,
            buffer.samples(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
            format,
        )
        .map_err(|e| encode_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut samples = Vec::new();
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&[(x * 3) as u8, (y * 7) as u8, 128]);
            }
        }
        PixelBuffer::from_raw(width, height, samples).unwrap()
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let buffer = gradient(16, 9);

        encode(&buffer, &path, 90).unwrap();
        let decoded = decode(&path).unwrap();

        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 9);
        assert_eq!(decoded.samples(), buffer.samples());
    }

    #[test]
    fn test_unknown_extension_defaults_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let buffer = gradient(8, 8);

        encode(&buffer, &path, 90).unwrap();
        // Content-based detection sees a JPEG despite the extension.
        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.width(), 8);
        assert_eq!(decoded.height(), 8);
    }

    #[test]
    fn test_decode_missing_file_is_a_decode_error() {
        let err = decode(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }
}
