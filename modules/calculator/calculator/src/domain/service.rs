//! Domain service for calculator
//!
//! Runs the pipeline: normalize → range check → evaluate → format.

use std::collections::BTreeMap;

use calculator_sdk::{
    CHAIN_OPERANDS, CHAIN_OPERATIONS, Calculation, CalculationInput, CalculatorApi,
    CalculatorError, Operation, Profile, RoundingMode, Shape,
};
use tracing::{debug, instrument};

use super::evaluate::{evaluate_binary, evaluate_chain};
use super::format::{display, plain};
use super::normalize::normalize;
use super::range::in_range;
use super::rounding::round_integer;
use crate::config::CalculatorConfig;

/// Domain service that performs calculations.
///
/// Stateless apart from the immutable profile table; shared between
/// handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Service {
    default_profile: String,
    profiles: BTreeMap<String, Profile>,
}

impl Service {
    /// Create a new service from a validated configuration.
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            default_profile: config.default_profile.clone(),
            profiles: config.profiles.clone(),
        }
    }

    fn lookup(&self, name: &str) -> Result<&Profile, CalculatorError> {
        self.profiles
            .get(name)
            .ok_or_else(|| CalculatorError::UnknownProfile(name.to_owned()))
    }

    fn calculate_binary(
        profile: &Profile,
        input: &CalculationInput,
    ) -> Result<Calculation, CalculatorError> {
        let normalized = (0..2)
            .map(|index| {
                normalize(input.number(index), profile.validation)
                    .map_err(|_| CalculatorError::InvalidFormat { operand: None })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let lhs = parse_value(&normalized[0])?;
        let rhs = parse_value(&normalized[1])?;
        if !(in_range(lhs, profile.limit) && in_range(rhs, profile.limit)) {
            return Err(CalculatorError::OperandOutOfRange {
                operand: None,
                limit: profile.limit,
            });
        }

        let operation = parse_operation(profile, input.operation(0))?;
        let value = evaluate_binary(profile, operation, lhs, rhs)?;

        Ok(finish(profile, value, normalized, vec![operation], None))
    }

    fn calculate_chain(
        profile: &Profile,
        input: &CalculationInput,
    ) -> Result<Calculation, CalculatorError> {
        let mut normalized = Vec::with_capacity(CHAIN_OPERANDS);
        let mut operands = [0.0; CHAIN_OPERANDS];
        for (index, operand) in operands.iter_mut().enumerate() {
            let position = Some(index + 1);
            let text = normalize(input.number(index), profile.validation)
                .map_err(|_| CalculatorError::InvalidFormat { operand: position })?;
            let value = parse_value(&text)?;
            if !in_range(value, profile.limit) {
                return Err(CalculatorError::OperandOutOfRange {
                    operand: position,
                    limit: profile.limit,
                });
            }
            *operand = value;
            normalized.push(text);
        }

        let mut operations = [Operation::Add; CHAIN_OPERATIONS];
        for (index, operation) in operations.iter_mut().enumerate() {
            *operation = parse_operation(profile, input.operation(index))?;
        }

        let mode = RoundingMode::from_token(input.rounding.as_deref());
        let value = evaluate_chain(profile, &operands, &operations)?;
        let rounded = round_integer(value, mode);

        Ok(finish(
            profile,
            value,
            normalized,
            operations.to_vec(),
            Some(rounded),
        ))
    }
}

impl CalculatorApi for Service {
    fn default_profile(&self) -> &str {
        &self.default_profile
    }

    fn profile(&self, name: &str) -> Result<Profile, CalculatorError> {
        self.lookup(name).cloned()
    }

    fn profiles(&self) -> BTreeMap<String, Profile> {
        self.profiles.clone()
    }

    #[instrument(skip(self, input))]
    fn calculate(
        &self,
        profile: &str,
        input: &CalculationInput,
    ) -> Result<Calculation, CalculatorError> {
        let resolved = self.lookup(profile)?;
        let outcome = match resolved.shape {
            Shape::Binary => Self::calculate_binary(resolved, input),
            Shape::Chain => Self::calculate_chain(resolved, input),
        };

        match &outcome {
            Ok(calculation) => debug!(result = %calculation.plain, "calculation completed"),
            Err(e) => debug!(error = %e, "calculation rejected"),
        }
        outcome
    }
}

fn parse_value(text: &str) -> Result<f64, CalculatorError> {
    text.parse::<f64>()
        .map_err(|e| CalculatorError::Conversion(e.to_string()))
}

fn parse_operation(profile: &Profile, token: &str) -> Result<Operation, CalculatorError> {
    let operation = token.parse::<Operation>()?;
    if profile.supports(operation) {
        Ok(operation)
    } else {
        Err(CalculatorError::UnknownOperation(token.to_owned()))
    }
}

fn finish(
    profile: &Profile,
    value: f64,
    normalized: Vec<String>,
    operations: Vec<Operation>,
    rounded: Option<i64>,
) -> Calculation {
    let plain = plain(value, profile.display_precision);
    let display = display(&plain, profile.display_precision);
    Calculation {
        value,
        plain,
        display,
        normalized,
        operations,
        rounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Service {
        Service::new(&CalculatorConfig::default())
    }

    fn binary(profile: &str, a: &str, b: &str, op: &str) -> Result<Calculation, CalculatorError> {
        service().calculate(profile, &CalculationInput::binary(Some(a), Some(b), Some(op)))
    }

    fn chain(
        numbers: [&str; 4],
        ops: [&str; 3],
        rounding: Option<&str>,
    ) -> Result<Calculation, CalculatorError> {
        let input = CalculationInput::chain(numbers.map(Some), ops.map(Some), rounding);
        service().calculate("v3", &input)
    }

    #[test]
    fn test_v2_add() {
        let calc = binary("v2", "1", "2", "add").unwrap();
        assert_eq!(calc.display, "3");
        assert_eq!(calc.normalized, vec!["1", "2"]);
        assert_eq!(calc.rounded, None);
    }

    #[test]
    fn test_v2_divide_by_zero() {
        assert_eq!(
            binary("v2", "10", "0", "divide"),
            Err(CalculatorError::DivisionByZero { slot: None })
        );
    }

    #[test]
    fn test_v2_divide_rounds_and_groups() {
        let calc = binary("v2", "2 000 000", "3", "divide").unwrap();
        assert_eq!(calc.display, "666 666.666667");
        assert_eq!(calc.plain, "666666.666667");
    }

    #[test]
    fn test_v2_invalid_format() {
        assert_eq!(
            binary("v2", "1.2.3", "1", "add"),
            Err(CalculatorError::InvalidFormat { operand: None })
        );
        assert_eq!(
            binary("v2", "1", "0.1234567", "add"),
            Err(CalculatorError::InvalidFormat { operand: None })
        );
    }

    #[test]
    fn test_v2_operand_out_of_range() {
        assert_eq!(
            binary("v2", "1000000000001", "1", "add"),
            Err(CalculatorError::OperandOutOfRange {
                operand: None,
                limit: calculator_sdk::DEFAULT_LIMIT
            })
        );
    }

    #[test]
    fn test_v2_result_overflow() {
        assert_eq!(
            binary("v2", "1000000000000", "1", "add"),
            Err(CalculatorError::Overflow)
        );
    }

    #[test]
    fn test_v1_lenient_and_limited_operations() {
        let calc = binary("v1", "1a2,5", "abc", "subtract").unwrap();
        assert_eq!(calc.normalized, vec!["12.5", "0"]);
        assert_eq!(calc.display, "12.5");

        assert_eq!(
            binary("v1", "6", "3", "divide"),
            Err(CalculatorError::UnknownOperation("divide".to_owned()))
        );
    }

    #[test]
    fn test_unknown_operation_token() {
        assert_eq!(
            binary("v2", "1", "2", "power"),
            Err(CalculatorError::UnknownOperation("power".to_owned()))
        );
    }

    #[test]
    fn test_v3_unknown_chain_token_rejected() {
        assert_eq!(
            chain(["2", "3", "4", "1"], ["add", "modulo", "subtract"], None),
            Err(CalculatorError::UnknownOperation("modulo".to_owned()))
        );
        assert_eq!(
            chain(["2", "3", "4", "1"], ["add", "add", ""], None),
            Err(CalculatorError::UnknownOperation(String::new()))
        );
    }

    #[test]
    fn test_absent_fields_default() {
        let calc = service()
            .calculate("v2", &CalculationInput::default())
            .unwrap();
        assert_eq!(calc.display, "0");
        assert_eq!(calc.operations, vec![Operation::Add]);
    }

    #[test]
    fn test_v3_chain_end_to_end() {
        let calc = chain(
            ["2", "3", "4", "1"],
            ["add", "multiply", "subtract"],
            None,
        )
        .unwrap();
        assert_eq!(calc.display, "13");
        assert_eq!(calc.rounded, Some(13));
        assert_eq!(calc.normalized, vec!["2", "3", "4", "1"]);
        assert_eq!(
            calc.operations,
            vec![Operation::Add, Operation::Multiply, Operation::Subtract]
        );
    }

    #[test]
    fn test_v3_rounding_modes() {
        let numbers = ["0", "5", "2", "0"];
        let ops = ["add", "divide", "add"];
        let rounded = |mode| chain(numbers, ops, mode).unwrap().rounded;
        assert_eq!(rounded(Some("mathematical")), Some(3));
        assert_eq!(rounded(Some("bankers")), Some(2));
        assert_eq!(rounded(Some("truncate")), Some(2));
        assert_eq!(rounded(Some("unknown")), Some(3));
        assert_eq!(rounded(None), Some(3));
        assert_eq!(chain(numbers, ops, None).unwrap().display, "2.5");
    }

    #[test]
    fn test_v3_errors_name_the_operand() {
        assert_eq!(
            chain(["1", "2", "x", "4"], ["add", "add", "add"], None),
            Err(CalculatorError::InvalidFormat { operand: Some(3) })
        );
        assert_eq!(
            chain(["1", "2", "3", "-1000000000001"], ["add", "add", "add"], None),
            Err(CalculatorError::OperandOutOfRange {
                operand: Some(4),
                limit: calculator_sdk::DEFAULT_LIMIT
            })
        );
    }

    #[test]
    fn test_v3_division_by_zero_slot() {
        assert_eq!(
            chain(["1", "1", "0", "1"], ["add", "divide", "add"], None),
            Err(CalculatorError::DivisionByZero { slot: Some(2) })
        );
    }

    #[test]
    fn test_v3_ten_fraction_digits() {
        let calc = chain(
            ["0.0000000001", "0", "0", "0"],
            ["add", "add", "add"],
            None,
        )
        .unwrap();
        assert_eq!(calc.display, "0.0000000001");
        assert_eq!(calc.rounded, Some(0));
    }

    #[test]
    fn test_unknown_profile() {
        assert_eq!(
            service().calculate("v9", &CalculationInput::default()),
            Err(CalculatorError::UnknownProfile("v9".to_owned()))
        );
        assert!(service().profile("v9").is_err());
        assert_eq!(service().profile("v2").unwrap(), Profile::v2());
    }
}
