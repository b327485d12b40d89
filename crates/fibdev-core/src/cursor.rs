//! Clamped position cursor over the valid index range.
//!
//! Every seek resolves to a position in `[0, MAX_INDEX]`. Out-of-range targets
//! are clamped, never rejected.

use crate::calculator::SequenceIndex;
use crate::constants::MAX_INDEX;

#[allow(clippy::cast_possible_wrap)]
const MAX_POSITION: i64 = MAX_INDEX as i64;

/// Base a seek delta is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekBase {
    /// Absolute: the delta is the target.
    Start,
    /// Relative to the current position.
    Current,
    /// Counted back from `MAX_INDEX`: the target is `MAX_INDEX - delta`.
    End,
}

impl SeekBase {
    /// Map a legacy whence code (0, 1, 2) to a base.
    #[must_use]
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Start),
            1 => Some(Self::Current),
            2 => Some(Self::End),
            _ => None,
        }
    }
}

/// Position within `[0, MAX_INDEX]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetCursor {
    position: SequenceIndex,
}

impl OffsetCursor {
    /// Create a cursor at position 0.
    #[must_use]
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> SequenceIndex {
        self.position
    }

    /// Move the cursor and return the clamped position.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn seek(&mut self, base: SeekBase, delta: i64) -> SequenceIndex {
        let target = match base {
            SeekBase::Start => delta,
            SeekBase::Current => (self.position as i64).saturating_add(delta),
            SeekBase::End => MAX_POSITION.saturating_sub(delta),
        };
        self.position = target.clamp(0, MAX_POSITION) as SequenceIndex;
        self.position
    }
}
