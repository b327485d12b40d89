//! Benchmark driver: warm-up writes, a timed ascending sweep, and an untimed
//! descending sweep over one open session.

use std::time::Instant;

use fibdev_cli::output::LatencySample;
use fibdev_cli::presenter::TracePresenter;
use fibdev_core::legacy::LegacyFile;
use fibdev_core::session::Channel;

/// Payload sent by warm-up writes. The device ignores it.
pub const WRITE_PAYLOAD: &[u8] = b"testing writing";

/// Shape of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkPlan {
    /// Highest offset read; sweeps cover `0..=offset`.
    pub offset: u64,
    /// Warm-up writes issued before reading.
    pub writes: u64,
}

impl BenchmarkPlan {
    /// Plan a run up to `offset` with `offset + 1` writes.
    #[must_use]
    pub fn new(offset: u64) -> Self {
        Self {
            offset,
            writes: offset.saturating_add(1),
        }
    }
}

/// Seek to an absolute offset and read through the legacy convention.
///
/// Returns the clamped position the seek landed on and the value read there.
fn seek_and_read<C: Channel>(file: &mut LegacyFile<C>, offset: u64) -> (i64, i64) {
    let mut buf = [0u8; 1];
    let position = file.llseek(i64::try_from(offset).unwrap_or(i64::MAX), 0);
    if u64::try_from(position).ok() != Some(offset) {
        tracing::trace!(offset, position, "seek clamped");
    }
    (position, file.read(&mut buf))
}

/// Drive `file` through the plan and return the timed ascending samples.
pub fn run_benchmark<C: Channel>(
    file: &mut LegacyFile<C>,
    plan: BenchmarkPlan,
    presenter: &dyn TracePresenter,
) -> Vec<LatencySample> {
    for _ in 0..plan.writes {
        let written = file.write(WRITE_PAYLOAD);
        presenter.present_write(written);
    }

    let mut samples = Vec::with_capacity(usize::try_from(plan.offset).unwrap_or(0) + 1);
    for offset in 0..=plan.offset {
        let start = Instant::now();
        let (_, value) = seek_and_read(file, offset);
        let elapsed = start.elapsed();
        presenter.present_read(offset, value);
        samples.push(LatencySample::new(offset, value, elapsed));
    }

    for offset in (0..=plan.offset).rev() {
        let (_, value) = seek_and_read(file, offset);
        presenter.present_read(offset, value);
    }

    tracing::debug!(
        writes = plan.writes,
        reads = samples.len(),
        "benchmark sweep complete"
    );
    samples
}
