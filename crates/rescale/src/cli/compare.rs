//! The `rescale compare` command: run all four algorithms concurrently and
//! report each result as it arrives.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Args;
use serde::Serialize;

use rescale_core::{Config, PixelBuffer, ResizeRequest, ResultReport, Scheduler};

use super::types::ReportFormat;
use crate::codec;

/// Arguments for the `compare` command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Image file to resize
    #[arg(required = true)]
    pub input: PathBuf,

    /// Target width in pixels
    #[arg(short = 'W', long)]
    pub width: u32,

    /// Target height in pixels
    #[arg(short = 'H', long)]
    pub height: u32,

    /// Save each output into this directory as <stem>_<algorithm>.jpg
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Report format (defaults to the configured output.format)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Worker pool width (defaults to config, then host parallelism)
    #[arg(short, long)]
    pub parallel: Option<usize>,
}

/// One report record in structured output.
#[derive(Debug, Serialize)]
pub struct ReportRecord {
    /// Algorithm name
    pub algorithm: String,

    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Elapsed time on the worker, whole milliseconds
    pub elapsed_ms: u64,

    /// Where the output was saved, when --out-dir was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
}

/// Execute the compare command.
pub async fn execute(args: CompareArgs, config: Config) -> anyhow::Result<()> {
    let source = codec::decode(&args.input)?;
    check_limits(&source, &args, &config)?;
    tracing::info!(
        "Loaded {:?} (Width: {} Height: {})",
        args.input,
        source.width(),
        source.height()
    );

    let format = args
        .format
        .or_else(|| ReportFormat::parse(&config.output.format))
        .unwrap_or(ReportFormat::Text);
    let scheduler = build_scheduler(args.parallel, &config);
    tracing::debug!("Worker pool width: {}", scheduler.parallel());

    let request = ResizeRequest::new(args.width, args.height);
    let source = Arc::new(source);

    // Text output streams a line per completion, in arrival order; reports
    // are collected regardless, for saving and structured output.
    let streaming = matches!(format, ReportFormat::Text);
    let collected: Arc<Mutex<Vec<ResultReport>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = collected.clone();
    scheduler
        .run_all(source, request, move |report| {
            if streaming {
                println!(
                    "{:<10} {}x{}  Time Taken: {}ms",
                    report.algorithm,
                    report.output.width(),
                    report.output.height(),
                    report.elapsed_ms
                );
            }
            sink.lock().unwrap().push(report);
        })
        .await?;

    let reports = match Arc::try_unwrap(collected) {
        Ok(mutex) => mutex.into_inner().unwrap_or_default(),
        Err(_) => anyhow::bail!("report sink still shared after run"),
    };

    let records = save_outputs(&reports, &args, &config)?;
    match format {
        ReportFormat::Text => {}
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        ReportFormat::Jsonl => {
            for record in &records {
                println!("{}", serde_json::to_string(record)?);
            }
        }
    }

    Ok(())
}

/// Reject inputs and targets beyond the configured limits before scheduling.
fn check_limits(source: &PixelBuffer, args: &CompareArgs, config: &Config) -> anyhow::Result<()> {
    let max_src = config.limits.max_image_dimension;
    if source.width() > max_src || source.height() > max_src {
        anyhow::bail!(
            "Source image is {}x{}, exceeding the configured maximum dimension {}",
            source.width(),
            source.height(),
            max_src
        );
    }
    let max_dst = config.limits.max_target_dimension;
    if args.width > max_dst || args.height > max_dst {
        anyhow::bail!(
            "Target size {}x{} exceeds the configured maximum dimension {}",
            args.width,
            args.height,
            max_dst
        );
    }
    Ok(())
}

/// Pool width resolution: CLI flag, then config, then host parallelism.
fn build_scheduler(flag: Option<usize>, config: &Config) -> Scheduler {
    match flag.unwrap_or(config.processing.parallel_workers) {
        0 => Scheduler::with_host_parallelism(),
        n => Scheduler::new(n),
    }
}

/// Save outputs when requested and build the structured report records.
fn save_outputs(
    reports: &[ResultReport],
    args: &CompareArgs,
    config: &Config,
) -> anyhow::Result<Vec<ReportRecord>> {
    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)?;
    }
    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resized");

    let mut records = Vec::with_capacity(reports.len());
    for report in reports {
        let saved_to = match &args.out_dir {
            Some(dir) => {
                let path = dir.join(format!("{stem}_{}.jpg", report.algorithm));
                codec::encode(&report.output, &path, config.output.jpeg_quality)?;
                tracing::info!("Saved {:?}", path);
                Some(path)
            }
            None => None,
        };
        records.push(ReportRecord {
            algorithm: report.algorithm.to_string(),
            width: report.output.width(),
            height: report.output.height(),
            elapsed_ms: report.elapsed_ms,
            saved_to,
        });
    }
    Ok(records)
}
