use std::collections::BTreeMap;

use calculator_sdk::Profile;
use serde::{Deserialize, Serialize};

/// Highest fraction precision a profile may request.
pub const MAX_PRECISION: usize = 15;

/// Language of the error messages returned in response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Configuration for the `calculator` module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Profile served by `POST /calculate`.
    #[serde(default = "default_profile")]
    pub default_profile: String,
    #[serde(default = "default_profiles")]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_profile: default_profile(),
            profiles: default_profiles(),
        }
    }
}

fn default_profile() -> String {
    "v3".to_owned()
}

fn default_profiles() -> BTreeMap<String, Profile> {
    BTreeMap::from([
        ("v1".to_owned(), Profile::v1()),
        ("v2".to_owned(), Profile::v2()),
        ("v3".to_owned(), Profile::v3()),
    ])
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no calculator profiles configured")]
    NoProfiles,

    #[error("default profile '{0}' is not configured")]
    MissingDefaultProfile(String),

    #[error("profile '{profile}': {field} must be a finite positive number")]
    InvalidLimit {
        profile: String,
        field: &'static str,
    },

    #[error("profile '{profile}': {field} exceeds {max} fraction digits", max = MAX_PRECISION)]
    PrecisionTooHigh {
        profile: String,
        field: &'static str,
    },

    #[error("profile '{0}' does not list any operation")]
    NoOperations(String),
}

impl CalculatorConfig {
    /// Check the configuration for values the pipeline cannot honour.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }
        if !self.profiles.contains_key(&self.default_profile) {
            return Err(ConfigError::MissingDefaultProfile(
                self.default_profile.clone(),
            ));
        }
        for (name, profile) in &self.profiles {
            validate_profile(name, profile)?;
        }
        Ok(())
    }
}

fn validate_profile(name: &str, profile: &Profile) -> Result<(), ConfigError> {
    for (field, limit) in [
        ("limit", profile.limit),
        ("intermediate_limit", profile.intermediate_limit),
    ] {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ConfigError::InvalidLimit {
                profile: name.to_owned(),
                field,
            });
        }
    }

    let precisions = [
        ("display_precision", Some(profile.display_precision)),
        ("division_precision", profile.division_precision),
        ("step_precision", profile.step_precision),
    ];
    for (field, precision) in precisions {
        if precision.is_some_and(|p| p > MAX_PRECISION) {
            return Err(ConfigError::PrecisionTooHigh {
                profile: name.to_owned(),
                field,
            });
        }
    }

    if profile.operations.is_empty() {
        return Err(ConfigError::NoOperations(name.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator_sdk::{Operation, Shape, Validation};

    #[test]
    fn test_default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.default_profile, "v3");
        assert_eq!(config.profiles.len(), 3);
    }

    #[test]
    fn test_parse_yaml_with_defaults() {
        let yaml = "locale: en\n";
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.default_profile, "v3");
        assert_eq!(config.profiles["v1"], Profile::v1());
    }

    #[test]
    fn test_parse_yaml_custom_profile() {
        let yaml = r"
default_profile: money
profiles:
  money:
    validation:
      strict:
        max_fraction_digits: 2
    display_precision: 2
    operations: [add, subtract]
    shape: binary
    limit: 1000000.0
";
        let config: CalculatorConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.validate(), Ok(()));

        let money = &config.profiles["money"];
        assert_eq!(
            money.validation,
            Validation::Strict {
                max_fraction_digits: 2
            }
        );
        assert_eq!(money.shape, Shape::Binary);
        assert_eq!(money.operations, vec![Operation::Add, Operation::Subtract]);
        assert!((money.limit - 1_000_000.0).abs() < f64::EPSILON);
        assert!((money.intermediate_limit - calculator_sdk::DEFAULT_LIMIT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<CalculatorConfig, _> = serde_saphyr::from_str("precision: 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_default_profile() {
        let config = CalculatorConfig {
            default_profile: "v4".to_owned(),
            ..CalculatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingDefaultProfile("v4".to_owned()))
        );
    }

    #[test]
    fn test_no_profiles() {
        let config = CalculatorConfig {
            profiles: BTreeMap::new(),
            ..CalculatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoProfiles));
    }

    #[test]
    fn test_invalid_profile_values() {
        let mut config = CalculatorConfig::default();
        config.profiles.get_mut("v2").unwrap().limit = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLimit { field: "limit", .. })
        ));

        let mut config = CalculatorConfig::default();
        config.profiles.get_mut("v3").unwrap().step_precision = Some(40);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PrecisionTooHigh {
                field: "step_precision",
                ..
            })
        ));

        let mut config = CalculatorConfig::default();
        config.profiles.get_mut("v1").unwrap().operations.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::NoOperations("v1".to_owned()))
        );
    }
}
