#![no_main]

use calculator::domain::normalize::normalize;
use calculator_sdk::Validation;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(canonical) = normalize(s, Validation::Lenient) {
            assert!(canonical.parse::<f64>().is_ok(), "{canonical:?}");
            assert_eq!(
                normalize(&canonical, Validation::Lenient).ok().as_deref(),
                Some(canonical.as_str())
            );
        }

        let strict = Validation::Strict {
            max_fraction_digits: 6,
        };
        if let Ok(canonical) = normalize(s, strict) {
            assert!(canonical.parse::<f64>().is_ok(), "{canonical:?}");
        }
    }
});
