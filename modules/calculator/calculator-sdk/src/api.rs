//! Calculator API trait
//!
//! Contract trait for the calculator service.

use std::collections::BTreeMap;

use crate::error::CalculatorError;
use crate::models::{Calculation, CalculationInput, Profile};

/// Calculator API trait
///
/// Computation is synchronous and stateless; implementations are shared
/// between request handlers behind an `Arc`.
pub trait CalculatorApi: Send + Sync {
    /// Name of the profile used when a request does not name one.
    fn default_profile(&self) -> &str;

    /// Look up a configured profile by name.
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnknownProfile`] if no such profile is configured.
    fn profile(&self, name: &str) -> Result<Profile, CalculatorError>;

    /// All configured profiles, keyed by name.
    fn profiles(&self) -> BTreeMap<String, Profile>;

    /// Run the calculation pipeline of `profile` over `input`.
    ///
    /// # Errors
    /// Returns a [`CalculatorError`] describing the first failing stage
    /// (validation, range check, evaluation). No partial result is produced.
    fn calculate(
        &self,
        profile: &str,
        input: &CalculationInput,
    ) -> Result<Calculation, CalculatorError>;
}
