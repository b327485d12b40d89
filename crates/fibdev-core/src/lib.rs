//! # fibdev-core
//!
//! Fibonacci engines behind an exclusive, offset-addressed device channel.
//!
//! A [`FibDevice`] hands out at most one [`Session`] at a time. The session
//! owns a cursor clamped to `[0, MAX_INDEX]`; reading computes F(cursor)
//! through the device's engine and returns it directly.

pub mod additive;
pub mod calculator;
pub mod constants;
pub mod cursor;
pub mod device;
pub mod fastdoubling;
pub mod legacy;
pub mod registry;
pub mod session;

// Re-exports
pub use calculator::{Calculator, FibError, FibValue, SequenceIndex};
pub use constants::{exit_codes, DEVICE_NAME, DEVICE_PATH, FIB_TABLE, MAX_INDEX};
pub use cursor::{OffsetCursor, SeekBase};
pub use device::FibDevice;
pub use legacy::{encode_legacy, LegacyFile};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use session::{Channel, Session};

/// Compute F(n) with the fast doubling engine.
///
/// Indices above 93 wrap modulo 2^64.
///
/// # Example
/// ```
/// assert_eq!(fibdev_core::fibonacci(10), 55);
/// assert_eq!(fibdev_core::fibonacci(0), 0);
/// ```
#[must_use]
pub fn fibonacci(n: SequenceIndex) -> FibValue {
    fastdoubling::FastDoubling::new().compute(n)
}
