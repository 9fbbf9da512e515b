#![no_main]

use calculator::domain::format::{display, plain};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[..8]);
    let value = f64::from_le_bytes(bytes);
    let precision = usize::from(data[8] % 16);

    let text = plain(value, precision);
    let _ = display(&text, precision);

    // Free-form text must never panic either.
    if let Ok(s) = std::str::from_utf8(&data[9..]) {
        let _ = display(s, precision);
    }
});
