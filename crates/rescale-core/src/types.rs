//! Core data types for a comparison run.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::ValidationError;
use crate::resample::Algorithm;

/// A requested target size for a comparison run.
///
/// Both dimensions must be strictly positive; [`ResizeRequest::validate`] is
/// called at the scheduling boundary before any job is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeRequest {
    /// Target width in pixels
    pub width: u32,

    /// Target height in pixels
    pub height: u32,
}

impl ResizeRequest {
    /// Create a new resize request.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are strictly positive.
    ///
    /// The error names the offending field so the caller can surface it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.width == 0 {
            return Err(ValidationError::ZeroDimension { field: "width" });
        }
        if self.height == 0 {
            return Err(ValidationError::ZeroDimension { field: "height" });
        }
        Ok(())
    }
}

/// The completion record for one algorithm's resize job.
///
/// Produced exactly once per completed job and handed to the caller's
/// completion callback; the caller owns the output buffer from then on.
#[derive(Debug)]
pub struct ResultReport {
    /// Which algorithm produced this output
    pub algorithm: Algorithm,

    /// The resized image, owned by the report
    pub output: PixelBuffer,

    /// Elapsed wall time in whole milliseconds, measured on the worker from
    /// the start of the resize to the output being fully constructed
    pub elapsed_ms: u64,
}
