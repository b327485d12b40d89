//! Exclusive access session and the channel contract it fulfils.
//!
//! A `Session` is the single holder of a device between open and close. It
//! owns the cursor for that window; the cursor is created at position 0 on
//! open and discarded on release.

use std::time::Instant;

use parking_lot::MutexGuard;

use crate::calculator::{Calculator, FibValue, SequenceIndex};
use crate::cursor::{OffsetCursor, SeekBase};

/// Operations a host maps its seek/read/write calls onto.
pub trait Channel {
    /// Move the cursor and return the clamped position. Never fails.
    fn seek(&mut self, base: SeekBase, delta: i64) -> SequenceIndex;

    /// Compute the value at the current position without moving the cursor.
    fn read(&self) -> FibValue;

    /// Accept a write. Content is ignored and exactly one unit is reported.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Current cursor position.
    fn position(&self) -> SequenceIndex;
}

/// Handle held for one open-to-close lifecycle of a device.
///
/// Dropping the session releases the device.
pub struct Session<'d> {
    _gate: MutexGuard<'d, ()>,
    engine: &'d dyn Calculator,
    cursor: OffsetCursor,
}

impl<'d> Session<'d> {
    pub(crate) fn new(gate: MutexGuard<'d, ()>, engine: &'d dyn Calculator) -> Self {
        Self {
            _gate: gate,
            engine,
            cursor: OffsetCursor::new(),
        }
    }

    /// Name of the engine this session reads through.
    #[must_use]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Release the device.
    pub fn close(self) {
        drop(self);
    }
}

impl Channel for Session<'_> {
    fn seek(&mut self, base: SeekBase, delta: i64) -> SequenceIndex {
        self.cursor.seek(base, delta)
    }

    fn read(&self) -> FibValue {
        let offset = self.cursor.position();
        let start = Instant::now();
        let value = self.engine.compute(offset);
        let elapsed_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
        tracing::debug!(offset, elapsed_ns, "read");
        value
    }

    fn write(&mut self, _data: &[u8]) -> usize {
        1
    }

    fn position(&self) -> SequenceIndex {
        self.cursor.position()
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        tracing::trace!(engine = self.engine.name(), "session released");
    }
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine.name())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
