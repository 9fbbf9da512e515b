//! Calculator module definition

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorApi;

use crate::api::rest::routes;
use crate::config::{CalculatorConfig, ConfigError, Locale};
use crate::domain::Service;

/// Calculator module.
///
/// Owns the validated configuration and the domain service, and exposes
/// the service through REST routes.
#[derive(Clone)]
pub struct CalculatorModule {
    service: Arc<Service>,
    locale: Locale,
}

impl CalculatorModule {
    /// Build the module from configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is inconsistent.
    pub fn new(config: &CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        tracing::info!(
            default_profile = %config.default_profile,
            profiles = config.profiles.len(),
            locale = ?config.locale,
            "Initializing calculator module"
        );

        Ok(Self {
            service: Arc::new(Service::new(config)),
            locale: config.locale,
        })
    }

    /// Calculator API backed by this module's service.
    #[must_use]
    pub fn api(&self) -> Arc<dyn CalculatorApi> {
        self.service.clone()
    }

    /// Mount the calculator REST endpoints on `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        routes::register_routes(router, self.api(), self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator_sdk::CalculationInput;

    #[test]
    fn test_default_config_builds() {
        let module = CalculatorModule::new(&CalculatorConfig::default()).unwrap();
        let api = module.api();
        assert_eq!(api.default_profile(), "v3");

        let calc = api
            .calculate("v2", &CalculationInput::binary(Some("2"), Some("3"), Some("multiply")))
            .unwrap();
        assert_eq!(calc.display, "6");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CalculatorConfig {
            default_profile: "v7".to_owned(),
            ..CalculatorConfig::default()
        };
        let err = CalculatorModule::new(&config).err().unwrap();
        assert_eq!(err, ConfigError::MissingDefaultProfile("v7".to_owned()));
    }
}
