#![no_main]

use calculator::{CalculatorConfig, CalculatorModule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_saphyr::from_str::<CalculatorConfig>(s) {
            let _ = CalculatorModule::new(&config);
        }
    }
});
