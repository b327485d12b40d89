//! Fast Doubling engine.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Iterates from the highest set bit of the index down to bit 0, carrying the
//! pair (F(k), F(k+1)). All arithmetic wraps modulo 2^64, so the result agrees
//! with the additive engine for every index, not only those that fit.

use crate::calculator::{Calculator, FibValue, SequenceIndex};

/// Fast Doubling engine, O(log n).
///
/// # Example
/// ```
/// use fibdev_core::calculator::Calculator;
/// use fibdev_core::fastdoubling::FastDoubling;
///
/// assert_eq!(FastDoubling::new().compute(92), 7_540_113_804_746_346_429);
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// One doubling step: (F(k), F(k+1)) -> (F(2k), F(2k+1)).
    #[inline]
    fn double(a: FibValue, b: FibValue) -> (FibValue, FibValue) {
        let c = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        (c, d)
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator for FastDoubling {
    fn compute(&self, index: SequenceIndex) -> FibValue {
        if index < 2 {
            return index;
        }

        let num_bits = 64 - index.leading_zeros();
        let (mut a, mut b): (FibValue, FibValue) = (0, 1);

        for i in (0..num_bits).rev() {
            let (c, d) = Self::double(a, b);

            if (index >> i) & 1 == 1 {
                // k = 2n + 1: (F(2n+1), F(2n+2))
                a = d;
                b = c.wrapping_add(d);
            } else {
                // k = 2n: (F(2n), F(2n+1))
                a = c;
                b = d;
            }
        }

        a
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
