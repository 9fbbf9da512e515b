#![no_main]

use calculator::api::rest::dto::CalculateRequest;
use calculator::domain::Service;
use calculator::CalculatorConfig;
use calculator_sdk::CalculatorApi;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<CalculateRequest>(data) else {
        return;
    };

    let service = Service::new(&CalculatorConfig::default());
    for (name, profile) in service.profiles() {
        let input = request.clone().into_input(profile.shape);
        if let Ok(calculation) = service.calculate(&name, &input) {
            assert!(calculation.value.is_finite());
        }
    }
});
