//! Reference engine using the additive recurrence.
//!
//! Linear in the index, two registers of state.

use crate::calculator::{Calculator, FibValue, SequenceIndex};

/// Additive Fibonacci engine.
///
/// # Example
/// ```
/// use fibdev_core::additive::Additive;
/// use fibdev_core::calculator::Calculator;
///
/// assert_eq!(Additive::new().compute(10), 55);
/// ```
pub struct Additive;

impl Additive {
    /// Create a new `Additive` engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Additive {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for Additive {
    fn compute(&self, index: SequenceIndex) -> FibValue {
        let mut a: FibValue = 0;
        let mut b: FibValue = 1;
        for _ in 0..index {
            let next = a.wrapping_add(b);
            a = std::mem::replace(&mut b, next);
        }
        a
    }

    fn name(&self) -> &'static str {
        "Additive"
    }
}
