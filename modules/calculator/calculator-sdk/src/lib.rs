//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorApi`)
//! - Error types (`CalculatorError`)
//! - Profile models (`Profile`, `Validation`, `Shape`) and operation tokens
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculationInput, CalculatorApi};
//!
//! let input = CalculationInput::binary(Some("1,5"), Some("2"), Some("add"));
//! let calculation = api.calculate("v2", &input)?;
//! assert_eq!(calculation.display, "3.5");
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT ===
mod api;
pub use api::CalculatorApi;

// === ERRORS ===
mod error;
pub use error::CalculatorError;

// === MODELS ===
pub mod models;
pub use models::{
    CHAIN_OPERANDS, CHAIN_OPERATIONS, Calculation, CalculationInput, DEFAULT_LIMIT, Operation,
    Profile, RoundingMode, Shape, Validation,
};
