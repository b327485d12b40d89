//! Calculator trait and the device error type.
//!
//! `Calculator` is implemented by each engine and consumed by the device.
//! Engines are pure: no shared mutable state, no error path.

/// Index into the Fibonacci sequence.
pub type SequenceIndex = u64;

/// A computed Fibonacci value.
///
/// Indices past [`MAX_INDEX`](crate::constants::MAX_INDEX) wrap modulo 2^64.
pub type FibValue = u64;

/// Error type for device and engine selection.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// Another session already holds the device.
    #[error("device busy: another session holds it")]
    Busy,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Trait for Fibonacci engines.
pub trait Calculator: Send + Sync {
    /// Compute F(index), wrapping modulo 2^64.
    fn compute(&self, index: SequenceIndex) -> FibValue;

    /// Get the name of this engine.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::Config("test".into());
        assert_eq!(err.to_string(), "configuration error: test");

        let err = FibError::Busy;
        assert_eq!(err.to_string(), "device busy: another session holds it");
    }

    #[test]
    fn calculator_is_object_safe() {
        struct Zero;
        impl Calculator for Zero {
            fn compute(&self, _index: SequenceIndex) -> FibValue {
                0
            }
            fn name(&self) -> &'static str {
                "Zero"
            }
        }
        let calc: Box<dyn Calculator> = Box::new(Zero);
        assert_eq!(calc.compute(10), 0);
        assert_eq!(calc.name(), "Zero");
    }
}
