//! rescale - compare image resampling algorithms side by side.
//!
//! Loads an image, resizes it to a requested size with four algorithms
//! (nearest-neighbor, bilinear, bicubic, Lanczos3) running concurrently, and
//! reports each algorithm's elapsed time as it completes.
//!
//! # Usage
//!
//! ```bash
//! # Run all four algorithms and print timings
//! rescale compare photo.jpg --width 800 --height 600
//!
//! # Also save the four outputs
//! rescale compare photo.jpg -W 800 -H 600 --out-dir ./resized
//!
//! # Single-algorithm resize
//! rescale resize photo.jpg small.jpg -W 320 -H 240 --algorithm lanczos
//!
//! # View configuration
//! rescale config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod codec;
mod logging;

/// rescale - compare image resampling algorithms side by side, timed.
#[derive(Parser, Debug)]
#[command(name = "rescale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run all four resampling algorithms concurrently and time each
    Compare(cli::compare::CompareArgs),

    /// Resize with a single algorithm and save the result
    Resize(cli::resize::ResizeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config-load warnings use eprintln.
    let config = match rescale_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `rescale config path`."
            );
            rescale_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("rescale v{}", rescale_core::VERSION);

    match cli.command {
        Commands::Compare(args) => cli::compare::execute(args, config).await,
        Commands::Resize(args) => cli::resize::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
