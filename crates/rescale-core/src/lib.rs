//! Rescale Core - image resampling comparison engine.
//!
//! Rescale takes one decoded RGB image and a target size, runs four
//! resampling algorithms (nearest-neighbor, bilinear, bicubic, Lanczos3)
//! concurrently over the shared read-only source, and reports each
//! algorithm's output and elapsed time independently as it completes.
//!
//! # Architecture
//!
//! ```text
//! PixelBuffer + ResizeRequest → validate → Scheduler → 4 × ResizeJob
//!                                                         │ (bounded pool)
//!                                          ResultReport ←─┘ per completion
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rescale_core::{PixelBuffer, ResizeRequest, Scheduler};
//!
//! #[tokio::main]
//! async fn main() -> rescale_core::Result<()> {
//!     let source = Arc::new(PixelBuffer::from_raw(width, height, samples)?);
//!     let scheduler = Scheduler::with_host_parallelism();
//!     scheduler
//!         .run_all(source, ResizeRequest::new(800, 600), |report| {
//!             println!("{}: Time Taken: {}ms", report.algorithm, report.elapsed_ms);
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod buffer;
pub mod config;
pub mod error;
pub mod resample;
pub mod scheduler;
pub mod types;

// Re-exports for convenient access
pub use buffer::{PixelBuffer, CHANNELS};
pub use config::Config;
pub use error::{
    BufferError, ConfigError, RescaleError, ResizeError, ResizeResult, Result, ValidationError,
};
pub use resample::{resize, Algorithm};
pub use scheduler::Scheduler;
pub use types::{ResizeRequest, ResultReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let buffer = PixelBuffer::filled(2, 2, [1, 2, 3]);
        let out = resize(Algorithm::Bilinear, &buffer, 4, 4);
        assert_eq!((out.width(), out.height()), (4, 4));
    }
}
