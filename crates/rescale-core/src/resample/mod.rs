//! Image resampling: four pixel-reconstruction algorithms over a shared
//! read-only buffer.
//!
//! - **nearest**: snap to the closest source sample, no interpolation
//! - **bilinear**: blend of the 4-neighborhood with fractional weights
//! - **kernel**: cubic and windowed-sinc weight functions
//! - **separable**: two-pass convolution driver used by bicubic and Lanczos
//!
//! All four paths share the half-pixel center coordinate mapping and the
//! clamp-to-edge boundary policy, so their outputs are directly comparable.

mod bilinear;
pub(crate) mod kernel;
mod nearest;
mod separable;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// The four resampling algorithms under comparison.
///
/// Each variant is a pure mapping policy and owns no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Nearest source sample, no interpolation
    #[serde(rename = "nearest")]
    NearestNeighbor,
    /// 4-tap blend of the surrounding samples
    #[serde(rename = "bilinear")]
    Bilinear,
    /// Separable 4x4 Catmull-Rom convolution
    #[serde(rename = "bicubic")]
    Bicubic,
    /// Separable 6-wide Lanczos3 windowed-sinc convolution
    #[serde(rename = "lanczos")]
    Lanczos,
}

impl Algorithm {
    /// All variants, in the order a comparison run schedules them.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::NearestNeighbor,
        Algorithm::Bilinear,
        Algorithm::Bicubic,
        Algorithm::Lanczos,
    ];

    /// Short lowercase name, used for report labels and file suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest",
            Algorithm::Bilinear => "bilinear",
            Algorithm::Bicubic => "bicubic",
            Algorithm::Lanczos => "lanczos",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" | "nearest-neighbor" => Ok(Algorithm::NearestNeighbor),
            "bilinear" => Ok(Algorithm::Bilinear),
            "bicubic" => Ok(Algorithm::Bicubic),
            "lanczos" => Ok(Algorithm::Lanczos),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Continuous source coordinate of output position `d` at the given scale,
/// with samples centered on half-pixel offsets.
#[inline]
pub(crate) fn source_center(d: u32, scale: f32) -> f32 {
    (d as f32 + 0.5) * scale - 0.5
}

/// Resize `source` to `width x height` with the given algorithm.
///
/// Pure and reentrant: never mutates the source and allocates its own output
/// buffer, so it is safe to invoke concurrently on the same source from
/// multiple threads. The caller validates that the target size is positive;
/// a zero target dimension yields an empty buffer.
///
/// # Panics
///
/// Panics if `source` has a zero dimension. The scheduler rejects degenerate
/// sources before any job is dispatched.
pub fn resize(algorithm: Algorithm, source: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    assert!(!source.is_empty(), "cannot resample an empty source");
    match algorithm {
        Algorithm::NearestNeighbor => nearest::resize(source, width, height),
        Algorithm::Bilinear => bilinear::resize(source, width, height),
        Algorithm::Bicubic => {
            separable::resize(source, width, height, kernel::catmull_rom, kernel::CUBIC_SUPPORT)
        }
        Algorithm::Lanczos => {
            separable::resize(source, width, height, kernel::lanczos3, kernel::LANCZOS_SUPPORT)
        }
    }
}
