//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the calculator module and its consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Symmetric bound applied to operands, intermediates and results.
pub const DEFAULT_LIMIT: f64 = 1_000_000_000_000.0;

/// Number of operands taken by a chain profile (`num1..num4`).
pub const CHAIN_OPERANDS: usize = 4;

/// Number of operation slots taken by a chain profile (`op1..op3`).
pub const CHAIN_OPERATIONS: usize = 3;

/// Arithmetic operation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Wire token of the operation.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation without any rounding or zero check.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(CalculatorError::UnknownOperation(other.to_owned())),
        }
    }
}

/// How a chain result is turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    Mathematical,
    /// Round half to even.
    Bankers,
    /// Round toward zero.
    Truncate,
}

impl RoundingMode {
    /// Resolve a request token. Absent and unrecognized tokens fall back to
    /// [`RoundingMode::Mathematical`].
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("bankers") => Self::Bankers,
            Some("truncate") => Self::Truncate,
            _ => Self::Mathematical,
        }
    }
}

/// Input validation applied before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// No structural checks; invalid characters are silently stripped.
    Lenient,
    /// Structural pre-validation and a cap on fractional digits.
    Strict { max_fraction_digits: usize },
}

/// How operands and operations combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// `num1 <operation> num2`.
    Binary,
    /// `(num1 <op1> (num2 <op2> num3)) <op3> num4`.
    Chain,
}

/// A configuration of the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub validation: Validation,
    /// Fraction digits kept by the display formatter.
    pub display_precision: usize,
    /// Operation tokens accepted by this profile.
    pub operations: Vec<Operation>,
    pub shape: Shape,
    /// Fraction digits a quotient is rounded to right after division.
    #[serde(default)]
    pub division_precision: Option<usize>,
    /// Fraction digits every evaluation step is rounded to.
    #[serde(default)]
    pub step_precision: Option<usize>,
    /// Bound for operands and the final result.
    #[serde(default = "default_limit")]
    pub limit: f64,
    /// Bound for intermediate chain results.
    #[serde(default = "default_limit")]
    pub intermediate_limit: f64,
}

fn default_limit() -> f64 {
    DEFAULT_LIMIT
}

impl Profile {
    /// Two operands, addition and subtraction, lenient input.
    #[must_use]
    pub fn v1() -> Self {
        Self {
            validation: Validation::Lenient,
            display_precision: 6,
            operations: vec![Operation::Add, Operation::Subtract],
            shape: Shape::Binary,
            division_precision: None,
            step_precision: None,
            limit: DEFAULT_LIMIT,
            intermediate_limit: DEFAULT_LIMIT,
        }
    }

    /// Two operands, four operations, strict input with up to 6 fraction digits.
    #[must_use]
    pub fn v2() -> Self {
        Self {
            validation: Validation::Strict {
                max_fraction_digits: 6,
            },
            display_precision: 6,
            operations: vec![
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
            shape: Shape::Binary,
            division_precision: Some(6),
            step_precision: None,
            limit: DEFAULT_LIMIT,
            intermediate_limit: DEFAULT_LIMIT,
        }
    }

    /// Four operands chained through three operations, strict input with up
    /// to 10 fraction digits.
    #[must_use]
    pub fn v3() -> Self {
        Self {
            validation: Validation::Strict {
                max_fraction_digits: 10,
            },
            display_precision: 10,
            operations: vec![
                Operation::Add,
                Operation::Subtract,
                Operation::Multiply,
                Operation::Divide,
            ],
            shape: Shape::Chain,
            division_precision: None,
            step_precision: Some(10),
            limit: DEFAULT_LIMIT,
            intermediate_limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub fn supports(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }
}

/// Raw request values, by position.
///
/// `numbers[0]` is `num1`; `operations[0]` is `operation` for binary
/// profiles and `op1` for chain profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationInput {
    pub numbers: Vec<Option<String>>,
    pub operations: Vec<Option<String>>,
    pub rounding: Option<String>,
}

impl CalculationInput {
    #[must_use]
    pub fn binary(num1: Option<&str>, num2: Option<&str>, operation: Option<&str>) -> Self {
        Self {
            numbers: vec![num1.map(str::to_owned), num2.map(str::to_owned)],
            operations: vec![operation.map(str::to_owned)],
            rounding: None,
        }
    }

    #[must_use]
    pub fn chain(
        numbers: [Option<&str>; CHAIN_OPERANDS],
        operations: [Option<&str>; CHAIN_OPERATIONS],
        rounding: Option<&str>,
    ) -> Self {
        Self {
            numbers: numbers.iter().map(|n| n.map(str::to_owned)).collect(),
            operations: operations.iter().map(|o| o.map(str::to_owned)).collect(),
            rounding: rounding.map(str::to_owned),
        }
    }

    /// Operand text at `index`; absent operands read as `"0"`.
    #[must_use]
    pub fn number(&self, index: usize) -> &str {
        self.numbers
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or("0")
    }

    /// Operation token at `index`; absent tokens read as `"add"`.
    #[must_use]
    pub fn operation(&self, index: usize) -> &str {
        self.operations
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or(Operation::Add.token())
    }
}

/// Successful outcome of a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub value: f64,
    /// Plain decimal rendering (no grouping, trailing zeros stripped).
    pub plain: String,
    /// Space-grouped display rendering.
    pub display: String,
    /// Canonical operand strings, in request order.
    pub normalized: Vec<String>,
    /// Operations as resolved from the request, in slot order.
    pub operations: Vec<Operation>,
    /// Integer rendering of the result (chain profiles only).
    pub rounded: Option<i64>,
}
