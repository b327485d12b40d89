//! Console presenter for the benchmark trace.

use std::time::Duration;

use crate::output::{format_duration, LatencySample};
use crate::ui;

/// Trait for presenting benchmark activity to the user.
pub trait TracePresenter {
    /// Present the result of a warm-up write.
    fn present_write(&self, result: i64);

    /// Present the result of a read at `offset`.
    fn present_read(&self, offset: u64, value: i64);

    /// Present a latency summary for one engine.
    fn present_summary(&self, engine: &str, samples: &[LatencySample]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI trace presenter.
pub struct CLITracePresenter {
    device_path: String,
    quiet: bool,
}

impl CLITracePresenter {
    #[must_use]
    pub fn new(device_path: impl Into<String>, quiet: bool) -> Self {
        Self {
            device_path: device_path.into(),
            quiet,
        }
    }

    /// Line printed for a write.
    #[must_use]
    pub fn write_line(&self, result: i64) -> String {
        format!(
            "Writing to {}, returned the sequence {result}",
            self.device_path
        )
    }

    /// Line printed for a read.
    #[must_use]
    pub fn read_line(&self, offset: u64, value: i64) -> String {
        format!(
            "Reading from {} at offset {offset}, returned the sequence {value}.",
            self.device_path
        )
    }
}

impl Default for CLITracePresenter {
    fn default() -> Self {
        Self::new(fibdev_core::DEVICE_PATH, false)
    }
}

/// Min, max and mean latency of a sample set.
#[must_use]
pub fn latency_stats(samples: &[LatencySample]) -> Option<(Duration, Duration, Duration)> {
    let min = samples.iter().map(|s| s.elapsed_ns).min()?;
    let max = samples.iter().map(|s| s.elapsed_ns).max()?;
    let total: u128 = samples.iter().map(|s| u128::from(s.elapsed_ns)).sum();
    let mean = u64::try_from(total / samples.len() as u128).unwrap_or(u64::MAX);
    Some((
        Duration::from_nanos(min),
        Duration::from_nanos(max),
        Duration::from_nanos(mean),
    ))
}

impl TracePresenter for CLITracePresenter {
    fn present_write(&self, result: i64) {
        if !self.quiet {
            println!("{}", self.write_line(result));
        }
    }

    fn present_read(&self, offset: u64, value: i64) {
        if !self.quiet {
            println!("{}", self.read_line(offset, value));
        }
    }

    fn present_summary(&self, engine: &str, samples: &[LatencySample]) {
        if self.quiet {
            return;
        }
        ui::print_header(engine);
        match latency_stats(samples) {
            Some((min, max, mean)) => {
                println!("  Reads: {}", samples.len());
                println!("  Min:   {}", format_duration(min));
                println!("  Max:   {}", format_duration(max));
                println!("  Mean:  {}", format_duration(mean));
            }
            None => println!("  No timed reads"),
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
