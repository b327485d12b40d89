#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::additive::Additive;
use fibdev_core::calculator::Calculator;
use fibdev_core::fastdoubling::FastDoubling;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes as n, capped so the additive engine stays fast
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let n = n % 100_000;

    let fast = FastDoubling::new().compute(n);
    let additive = Additive::new().compute(n);
    assert_eq!(fast, additive, "FastDoubling != Additive at n={n}");
});
