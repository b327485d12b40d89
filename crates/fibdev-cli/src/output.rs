//! Latency samples and their on-disk log formats.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

/// One timed seek+read against the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatencySample {
    /// Offset requested by the client (may exceed the device range).
    pub offset: u64,
    /// Status value the read returned.
    pub value: i64,
    /// Wall time of the seek+read pair, in nanoseconds.
    pub elapsed_ns: u64,
}

impl LatencySample {
    /// Build a sample from a measured duration.
    #[must_use]
    pub fn new(offset: u64, value: i64, elapsed: Duration) -> Self {
        Self {
            offset,
            value,
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    /// Elapsed time as a `Duration`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }
}

/// Latency log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One "offset nanoseconds" line per sample, suitable for plotting.
    #[default]
    Text,
    /// A JSON array of samples.
    Json,
}

/// File name the latency log for an engine is written under.
#[must_use]
pub fn log_file_name(engine: &str) -> &'static str {
    match engine {
        "Additive" => "original",
        "FastDoubling" => "fast_doubling",
        _ => "latency",
    }
}

/// Format a short duration for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}

/// Render samples in the given format.
pub fn render_log(samples: &[LatencySample], format: LogFormat) -> io::Result<String> {
    match format {
        LogFormat::Text => Ok(samples
            .iter()
            .map(|s| format!("{} {}\n", s.offset, s.elapsed_ns))
            .collect()),
        LogFormat::Json => serde_json::to_string_pretty(samples).map_err(io::Error::other),
    }
}

/// Write the latency log to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be created or written.
pub fn write_latency_log(
    path: &Path,
    samples: &[LatencySample],
    format: LogFormat,
) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = render_log(samples, format)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!(path = %path.display(), samples = samples.len(), "latency log written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<LatencySample> {
        vec![
            LatencySample::new(0, 0, Duration::from_nanos(120)),
            LatencySample::new(10, 55, Duration::from_nanos(340)),
        ]
    }

    #[test]
    fn format_duration_nanos() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
    }

    #[test]
    fn format_duration_micro() {
        assert!(format_duration(Duration::from_nanos(1_500)).contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
    }

    #[test]
    fn format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_secs(2)), "2.000s");
    }

    #[test]
    fn text_log_lines() {
        let text = render_log(&samples(), LogFormat::Text).unwrap();
        assert_eq!(text, "0 120\n10 340\n");
    }

    #[test]
    fn json_log_fields() {
        let json = render_log(&samples(), LogFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["offset"], 10);
        assert_eq!(parsed[1]["value"], 55);
        assert_eq!(parsed[1]["elapsed_ns"], 340);
    }

    #[test]
    fn empty_text_log() {
        assert_eq!(render_log(&[], LogFormat::Text).unwrap(), "");
    }

    #[test]
    fn log_names_follow_engine() {
        assert_eq!(log_file_name("Additive"), "original");
        assert_eq!(log_file_name("FastDoubling"), "fast_doubling");
        assert_eq!(log_file_name("Other"), "latency");
    }

    #[test]
    fn write_creates_parent_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("plot").join("fast_doubling");
        write_latency_log(&path, &samples(), LogFormat::Text).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn sample_elapsed_roundtrip() {
        let s = LatencySample::new(3, 2, Duration::from_nanos(777));
        assert_eq!(s.elapsed(), Duration::from_nanos(777));
    }
}
