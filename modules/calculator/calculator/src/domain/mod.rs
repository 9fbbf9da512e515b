//! Domain layer for calculator module
//!
//! Contains the number pipeline and the service orchestrating it.

pub mod evaluate;
pub mod format;
pub mod normalize;
pub mod range;
pub mod rounding;
pub mod service;

pub use service::Service;
