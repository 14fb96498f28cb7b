//! CLI enum types shared by the compare and resize commands.

use clap::ValueEnum;
use rescale_core::Algorithm;

/// Algorithm selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlgorithmArg {
    /// Nearest-neighbor, no interpolation
    Nearest,
    /// Bilinear 4-tap blend (default interpolation policy)
    Bilinear,
    /// Bicubic Catmull-Rom convolution
    Bicubic,
    /// Lanczos3 windowed-sinc convolution
    Lanczos,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Nearest => Algorithm::NearestNeighbor,
            AlgorithmArg::Bilinear => Algorithm::Bilinear,
            AlgorithmArg::Bicubic => Algorithm::Bicubic,
            AlgorithmArg::Lanczos => Algorithm::Lanczos,
        }
    }
}

impl std::fmt::Display for AlgorithmArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(Algorithm::from(*self).as_str())
    }
}

/// Report output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines, streamed as each algorithm completes
    Text,
    /// Single JSON array of report records
    Json,
    /// One JSON record per line
    Jsonl,
}

impl ReportFormat {
    /// Parse the config-file form (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "jsonl" => Some(Self::Jsonl),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}
