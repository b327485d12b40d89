//! Adapter exposing a channel through the legacy file-operation convention.
//!
//! In that convention `read` returns the computed value as its own status
//! instead of filling the caller's buffer, `write` returns 1 whatever it is
//! given, and `llseek` takes a raw whence code. Values are narrowed into the
//! signed status word only here.

use crate::calculator::FibValue;
use crate::cursor::SeekBase;
use crate::session::Channel;

/// Narrow a value into the signed 64-bit status word.
///
/// Reinterprets the bits, so values above `i64::MAX` come out negative. Every
/// index up to `MAX_INDEX` fits without loss.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn encode_legacy(value: FibValue) -> i64 {
    value as i64
}

/// Legacy file view over a channel.
pub struct LegacyFile<C> {
    channel: C,
}

impl<C: Channel> LegacyFile<C> {
    /// Wrap a channel.
    #[must_use]
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Seek with a raw whence code (0 = start, 1 = current, 2 = end).
    ///
    /// An unrecognised code resolves to position 0.
    #[allow(clippy::cast_possible_wrap)]
    pub fn llseek(&mut self, offset: i64, whence: i32) -> i64 {
        let position = match SeekBase::from_raw(whence) {
            Some(base) => self.channel.seek(base, offset),
            None => self.channel.seek(SeekBase::Start, 0),
        };
        position as i64
    }

    /// Return F(position) as the call's result. `buf` is left untouched.
    pub fn read(&self, _buf: &mut [u8]) -> i64 {
        encode_legacy(self.channel.read())
    }

    /// Accept `buf` without effect and report one unit written.
    #[allow(clippy::cast_possible_wrap)]
    pub fn write(&mut self, buf: &[u8]) -> i64 {
        self.channel.write(buf) as i64
    }

    /// Borrow the wrapped channel.
    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Unwrap the channel.
    pub fn into_inner(self) -> C {
        self.channel
    }
}
