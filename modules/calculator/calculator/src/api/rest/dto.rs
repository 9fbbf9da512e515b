//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde for JSON bodies).

use std::collections::BTreeMap;

use calculator_sdk::{Calculation, CalculationInput, Profile, Shape};
use serde::{Deserialize, Serialize};

/// Operand as sent by clients: a string or a bare JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OperandText {
    Text(String),
    Number(serde_json::Number),
}

impl OperandText {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number_text(&number),
        }
    }
}

/// Positional decimal text of a JSON number; never uses exponent notation.
fn number_text(number: &serde_json::Number) -> String {
    if let Some(n) = number.as_i64() {
        n.to_string()
    } else if let Some(n) = number.as_u64() {
        n.to_string()
    } else if let Some(n) = number.as_f64() {
        format!("{n}")
    } else {
        number.to_string()
    }
}

/// Request body for both profile shapes.
///
/// Binary profiles read `num1`, `num2` and `operation`; chain profiles read
/// `num1..num4`, `op1..op3` and `rounding`. Other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    pub num1: Option<OperandText>,
    pub num2: Option<OperandText>,
    pub num3: Option<OperandText>,
    pub num4: Option<OperandText>,
    pub operation: Option<String>,
    pub op1: Option<String>,
    pub op2: Option<String>,
    pub op3: Option<String>,
    pub rounding: Option<String>,
}

impl CalculateRequest {
    /// Positional input for a profile of the given shape.
    #[must_use]
    pub fn into_input(self, shape: Shape) -> CalculationInput {
        let text = |operand: Option<OperandText>| operand.map(OperandText::into_text);
        match shape {
            Shape::Binary => CalculationInput {
                numbers: vec![text(self.num1), text(self.num2)],
                operations: vec![self.operation],
                rounding: None,
            },
            Shape::Chain => CalculationInput {
                numbers: vec![
                    text(self.num1),
                    text(self.num2),
                    text(self.num3),
                    text(self.num4),
                ],
                operations: vec![self.op1, self.op2, self.op3],
                rounding: self.rounding,
            },
        }
    }
}

/// Successful binary calculation.
#[derive(Debug, Clone, Serialize)]
pub struct BinaryResponse {
    pub result: String,
    pub normalized_num1: String,
    pub normalized_num2: String,
}

/// Successful chain calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ChainResponse {
    pub result: String,
    pub rounded_result: String,
    pub normalized_numbers: Vec<String>,
    pub operations: Vec<String>,
}

/// Failed calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response body of the calculate endpoints; the outcome is conveyed by
/// the body shape alone.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Binary(BinaryResponse),
    Chain(ChainResponse),
    Error(ErrorResponse),
}

impl CalculateResponse {
    #[must_use]
    pub fn error(message: String) -> Self {
        Self::Error(ErrorResponse { error: message })
    }

    #[must_use]
    pub fn from_calculation(calculation: Calculation, shape: Shape) -> Self {
        let Calculation {
            display,
            normalized,
            operations,
            rounded,
            ..
        } = calculation;

        match shape {
            Shape::Binary => {
                let mut normalized = normalized.into_iter();
                Self::Binary(BinaryResponse {
                    result: display,
                    normalized_num1: normalized.next().unwrap_or_default(),
                    normalized_num2: normalized.next().unwrap_or_default(),
                })
            }
            Shape::Chain => Self::Chain(ChainResponse {
                result: display,
                rounded_result: rounded.unwrap_or_default().to_string(),
                normalized_numbers: normalized,
                operations: operations
                    .iter()
                    .map(|op| op.token().to_owned())
                    .collect(),
            }),
        }
    }
}

/// Response of `GET /profiles`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilesResponse {
    pub default_profile: String,
    pub profiles: BTreeMap<String, Profile>,
}
