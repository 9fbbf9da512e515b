//! Calculator Module
//!
//! Normalizes free-form numeric text, evaluates it under a configured
//! profile and renders the result as a space-grouped display string.
//!
//! ## Architecture
//!
//! - `domain/normalize.rs` - Input validation and canonicalization
//! - `domain/range.rs` - Symmetric bound checks
//! - `domain/evaluate.rs` - Binary and chained evaluation
//! - `domain/rounding.rs` - Integer rounding modes
//! - `domain/format.rs` - Display formatting
//! - `domain/service.rs` - Pipeline orchestration (`CalculatorApi` impl)
//! - `api/rest/` - JSON DTOs, handlers and routes
//! - `module.rs` - Module construction and route registration
//!
//! External consumers should use the `calculator-sdk` crate for the API
//! trait and models.

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === CONFIGURATION ===
pub mod config;
pub use config::{CalculatorConfig, ConfigError, Locale};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
