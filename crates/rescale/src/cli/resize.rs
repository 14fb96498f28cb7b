//! The `rescale resize` command: single-algorithm resize and save.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;

use rescale_core::{Config, ResizeRequest};

use super::types::AlgorithmArg;
use crate::codec;

/// Arguments for the `resize` command.
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Image file to resize
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file; format follows the extension, JPEG by default
    #[arg(required = true)]
    pub output: PathBuf,

    /// Target width in pixels
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    pub height: u32,

    /// Resampling algorithm; bilinear is the default interpolation policy
    #[arg(short, long, value_enum, default_value = "bilinear")]
    pub algorithm: AlgorithmArg,
}

/// Execute the resize command.
pub async fn execute(args: ResizeArgs, config: Config) -> anyhow::Result<()> {
    let request = ResizeRequest::new(args.width, args.height);
    request.validate()?;
    let max_dst = config.limits.max_target_dimension;
    if args.width > max_dst || args.height > max_dst {
        anyhow::bail!(
            "Target size {}x{} exceeds the configured maximum dimension {}",
            args.width,
            args.height,
            max_dst
        );
    }

    let source = codec::decode(&args.input)?;
    let max_src = config.limits.max_image_dimension;
    if source.width() > max_src || source.height() > max_src {
        anyhow::bail!(
            "Source image is {}x{}, exceeding the configured maximum dimension {}",
            source.width(),
            source.height(),
            max_src
        );
    }
    tracing::info!(
        "Loaded {:?} (Width: {} Height: {})",
        args.input,
        source.width(),
        source.height()
    );

    let started = Instant::now();
    let output = rescale_core::resize(args.algorithm.into(), &source, args.width, args.height);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    codec::encode(&output, &args.output, config.output.jpeg_quality)?;
    println!(
        "{:<10} {}x{}  Time Taken: {}ms  -> {}",
        args.algorithm,
        output.width(),
        output.height(),
        elapsed_ms,
        args.output.display()
    );

    Ok(())
}
