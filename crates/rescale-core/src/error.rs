//! Error types for the rescale comparison engine.
//!
//! Errors are organized by area. Everything that can go wrong is detected
//! synchronously, before any resize job is scheduled — the kernels themselves
//! are total functions over any valid buffer and positive target size.

use thiserror::Error;

/// Top-level error type for rescale operations.
#[derive(Error, Debug)]
pub enum RescaleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resize scheduling errors
    #[error("Resize error: {0}")]
    Resize(#[from] ResizeError),

    /// Pixel buffer construction errors
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors detected at the scheduling boundary, before any job exists.
#[derive(Error, Debug)]
pub enum ResizeError {
    /// A comparison run was requested with no usable source image
    #[error("No source image loaded")]
    NoImage,

    /// The target size failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Invalid resize request, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Target dimension is zero
    #[error("Target {field} must be greater than zero")]
    ZeroDimension { field: &'static str },
}

/// Pixel buffer invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Sample slice length does not match width * height * channels
    #[error("Sample buffer length {actual} does not match {width}x{height}x3 = {expected}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Convenience type alias for rescale results.
pub type Result<T> = std::result::Result<T, RescaleError>;

/// Convenience type alias for scheduling-boundary results.
pub type ResizeResult<T> = std::result::Result<T, ResizeError>;
