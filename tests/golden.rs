//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks both engines, the
//! device read path, and the legacy adapter against known values.

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::Deserialize;

use fibdev_core::additive::Additive;
use fibdev_core::calculator::Calculator;
use fibdev_core::constants::{FIB_TABLE, MAX_INDEX};
use fibdev_core::cursor::SeekBase;
use fibdev_core::device::FibDevice;
use fibdev_core::fastdoubling::FastDoubling;
use fibdev_core::legacy::LegacyFile;
use fibdev_core::session::Channel;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
    wrapped: Vec<WrappedEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: u64,
    fib: String,
}

#[derive(Deserialize)]
struct WrappedEntry {
    n: u64,
    fib_mod_2_64: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn engines() -> Vec<Arc<dyn Calculator>> {
    vec![Arc::new(Additive::new()), Arc::new(FastDoubling::new())]
}

// ---------------------------------------------------------------------------
// Golden: exact values over the device range
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_all_engines() {
    let data = load_golden_data();
    for engine in engines() {
        for entry in &data.values {
            let expected: u64 = entry.fib.parse().unwrap();
            assert_eq!(
                engine.compute(entry.n),
                expected,
                "{} F({})",
                engine.name(),
                entry.n
            );
        }
    }
}

#[test]
fn golden_exact_through_device() {
    let data = load_golden_data();
    for engine in engines() {
        let device = FibDevice::new(engine);
        let mut session = device.open().unwrap();
        for entry in &data.values {
            let delta = i64::try_from(entry.n).unwrap();
            assert_eq!(session.seek(SeekBase::Start, delta), entry.n);
            assert_eq!(session.read().to_string(), entry.fib);
        }
    }
}

#[test]
fn golden_exact_through_legacy_adapter() {
    let data = load_golden_data();
    let device = FibDevice::default();
    let mut file = LegacyFile::new(device.open().unwrap());
    for entry in &data.values {
        file.llseek(i64::try_from(entry.n).unwrap(), 0);
        assert_eq!(file.read(&mut [0u8; 1]).to_string(), entry.fib);
    }
}

#[test]
fn golden_values_below_max_index() {
    let data = load_golden_data();
    assert!(data.values.iter().all(|e| e.n <= MAX_INDEX));
    assert!(data.values.iter().any(|e| e.n == MAX_INDEX));
}

// ---------------------------------------------------------------------------
// Golden: wrapped values past the device range
// ---------------------------------------------------------------------------

#[test]
fn golden_wrapped_all_engines() {
    let data = load_golden_data();
    for engine in engines() {
        for entry in &data.wrapped {
            let expected: u64 = entry.fib_mod_2_64.parse().unwrap();
            assert_eq!(
                engine.compute(entry.n),
                expected,
                "{} F({}) mod 2^64",
                engine.name(),
                entry.n
            );
        }
    }
}

#[test]
fn golden_wrapped_matches_wide_reference() {
    let data = load_golden_data();
    let modulus = BigUint::from(1u32) << 64u32;
    for entry in &data.wrapped {
        let (mut a, mut b) = (BigUint::zero(), BigUint::from(1u32));
        for _ in 0..entry.n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        assert_eq!((a % &modulus).to_string(), entry.fib_mod_2_64, "F({})", entry.n);
    }
}

// ---------------------------------------------------------------------------
// Table consistency
// ---------------------------------------------------------------------------

#[test]
fn table_matches_engines() {
    for engine in engines() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(engine.compute(n as u64), expected, "{} F({n})", engine.name());
        }
    }
}
