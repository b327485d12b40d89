#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdev_core::constants::MAX_INDEX;
use fibdev_core::device::FibDevice;
use fibdev_core::legacy::LegacyFile;

// Each 9-byte chunk is one llseek: a whence code and a little-endian delta.
fuzz_target!(|data: &[u8]| {
    let device = FibDevice::default();
    let Ok(session) = device.open() else {
        return;
    };
    let mut file = LegacyFile::new(session);

    for chunk in data.chunks_exact(9) {
        let whence = i32::from(chunk[0] % 4);
        let mut delta = [0u8; 8];
        delta.copy_from_slice(&chunk[1..]);
        let pos = file.llseek(i64::from_le_bytes(delta), whence);
        assert!((0..=MAX_INDEX as i64).contains(&pos), "position {pos} out of range");

        let first = file.read(&mut []);
        let second = file.read(&mut []);
        assert_eq!(first, second);
        assert!(first >= 0, "negative read at {pos}");
    }
});
