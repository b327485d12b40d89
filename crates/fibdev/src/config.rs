//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibdev_cli::output::LogFormat;
use fibdev_core::constants::DEVICE_PATH;

/// fibdev — latency benchmark client for the Fibonacci device.
#[derive(Parser, Debug)]
#[command(name = "fibdev", version, about)]
pub struct AppConfig {
    /// Engine to drive the device with: fast, additive, or all.
    #[arg(short, long, default_value = "fast", env = "FIBDEV_METHOD")]
    pub method: String,

    /// Highest offset to read. Offsets past the device range are clamped.
    #[arg(long, default_value = "100", env = "FIBDEV_OFFSET")]
    pub offset: u64,

    /// Number of warm-up writes (defaults to offset + 1).
    #[arg(long)]
    pub writes: Option<u64>,

    /// Directory latency logs are written to.
    #[arg(short, long, default_value = "plot")]
    pub output_dir: PathBuf,

    /// Latency log format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub format: LogFormat,

    /// Device path shown in trace lines.
    #[arg(long, default_value = DEVICE_PATH)]
    pub device_path: String,

    /// Quiet mode (no per-call trace lines or summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Number of warm-up writes to issue.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.writes.unwrap_or_else(|| self.offset.saturating_add(1))
    }
}
