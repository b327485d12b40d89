//! Constants for the device index range and process exit codes.

/// Largest index the device will address.
///
/// F(92) = 7,540,113,804,746,346,429 is the largest Fibonacci number that
/// fits in the signed 64-bit status channel the legacy read convention
/// returns through. F(93) exceeds `i64::MAX`.
pub const MAX_INDEX: u64 = 92;

/// Name the device registers under on a host.
pub const DEVICE_NAME: &str = "fibonacci";

/// Path a host exposes the device at.
pub const DEVICE_PATH: &str = "/dev/fibonacci";

/// Precomputed Fibonacci values for n = 0..=92.
pub const FIB_TABLE: [u64; 93] = {
    let mut table = [0u64; 93];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the benchmark client.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Device already held by another session (matches `EBUSY`).
    pub const ERROR_BUSY: i32 = 16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[92], 7_540_113_804_746_346_429);
    }

    #[test]
    fn last_value_fits_signed_channel() {
        assert!(i64::try_from(FIB_TABLE[MAX_INDEX as usize]).is_ok());
        let next = FIB_TABLE[91] + FIB_TABLE[92];
        assert!(i64::try_from(next).is_err());
    }

    #[test]
    fn busy_code_matches_ebusy() {
        assert_eq!(exit_codes::ERROR_BUSY, 16);
    }
}
