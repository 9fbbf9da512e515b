//! Evaluation of binary and chained calculations.
//!
//! The chain evaluates in a fixed order that is not left to right:
//!
//! 1. `i1 = n2 <op2> n3`
//! 2. `i2 = n1 <op1> i1`
//! 3. `result = i2 <op3> n4`

use calculator_sdk::{CHAIN_OPERANDS, CHAIN_OPERATIONS, CalculatorError, Operation, Profile};

use super::range::in_range;

/// Operand of a chain step: an input number or an earlier step's result.
#[derive(Debug, Clone, Copy)]
enum Term {
    Operand(usize),
    Step(usize),
}

/// `lhs <operations[slot]> rhs`
#[derive(Debug, Clone, Copy)]
struct Step {
    slot: usize,
    lhs: Term,
    rhs: Term,
}

const CHAIN: [Step; CHAIN_OPERATIONS] = [
    Step {
        slot: 1,
        lhs: Term::Operand(1),
        rhs: Term::Operand(2),
    },
    Step {
        slot: 0,
        lhs: Term::Operand(0),
        rhs: Term::Step(0),
    },
    Step {
        slot: 2,
        lhs: Term::Step(1),
        rhs: Term::Operand(3),
    },
];

/// Round `value` to `digits` fraction digits through its decimal rendering.
///
/// # Errors
/// Returns [`CalculatorError::Conversion`] if the rendering does not parse back.
pub fn round_fraction(value: f64, digits: usize) -> Result<f64, CalculatorError> {
    format!("{value:.digits$}")
        .parse::<f64>()
        .map_err(|e| CalculatorError::Conversion(e.to_string()))
}

/// Apply one operation with the profile's rounding rules.
fn apply(profile: &Profile, operation: Operation, lhs: f64, rhs: f64) -> Result<f64, CalculatorError> {
    let mut value = operation.apply(lhs, rhs);
    if operation == Operation::Divide
        && let Some(digits) = profile.division_precision
    {
        value = round_fraction(value, digits)?;
    }
    if let Some(digits) = profile.step_precision {
        value = round_fraction(value, digits)?;
    }
    Ok(value)
}

/// Evaluate `lhs <operation> rhs`.
///
/// # Errors
/// - [`CalculatorError::UnknownOperation`] if the profile does not support `operation`
/// - [`CalculatorError::DivisionByZero`] when dividing by zero
/// - [`CalculatorError::Overflow`] if the result leaves the profile's bound
pub fn evaluate_binary(
    profile: &Profile,
    operation: Operation,
    lhs: f64,
    rhs: f64,
) -> Result<f64, CalculatorError> {
    if !profile.supports(operation) {
        return Err(CalculatorError::UnknownOperation(
            operation.token().to_owned(),
        ));
    }
    if operation == Operation::Divide && rhs == 0.0 {
        return Err(CalculatorError::DivisionByZero { slot: None });
    }

    let value = apply(profile, operation, lhs, rhs)?;
    if !in_range(value, profile.limit) {
        return Err(CalculatorError::Overflow);
    }
    Ok(value)
}

/// Evaluate the fixed four-operand chain.
///
/// Zero divisors taken directly from `operands` are reported before any step
/// runs; a zero intermediate divisor is reported when its step is reached.
/// Division-by-zero errors carry the 1-based operation slot. An operation
/// the profile does not support is rejected before any step runs; it never
/// evaluates to zero.
///
/// # Errors
/// - [`CalculatorError::UnknownOperation`] if the profile does not support an operation
/// - [`CalculatorError::DivisionByZero`] when a step divides by zero
/// - [`CalculatorError::IntermediateOverflow`] if an intermediate leaves the intermediate bound
/// - [`CalculatorError::Overflow`] if the result leaves the profile's bound
pub fn evaluate_chain(
    profile: &Profile,
    operands: &[f64; CHAIN_OPERANDS],
    operations: &[Operation; CHAIN_OPERATIONS],
) -> Result<f64, CalculatorError> {
    if let Some(unsupported) = operations.iter().find(|op| !profile.supports(**op)) {
        return Err(CalculatorError::UnknownOperation(
            unsupported.token().to_owned(),
        ));
    }

    for step in &CHAIN {
        if let Term::Operand(index) = step.rhs
            && operations[step.slot] == Operation::Divide
            && operands[index] == 0.0
        {
            return Err(CalculatorError::DivisionByZero {
                slot: Some(step.slot + 1),
            });
        }
    }

    let mut results = [0.0; CHAIN_OPERATIONS];
    for (index, step) in CHAIN.iter().enumerate() {
        let resolve = |term: Term| match term {
            Term::Operand(i) => operands[i],
            Term::Step(i) => results[i],
        };
        let (lhs, rhs) = (resolve(step.lhs), resolve(step.rhs));
        let operation = operations[step.slot];

        if operation == Operation::Divide && rhs == 0.0 {
            return Err(CalculatorError::DivisionByZero {
                slot: Some(step.slot + 1),
            });
        }

        let value = apply(profile, operation, lhs, rhs)?;
        let is_final = index + 1 == CHAIN.len();
        if is_final && !in_range(value, profile.limit) {
            return Err(CalculatorError::Overflow);
        }
        if !is_final && !in_range(value, profile.intermediate_limit) {
            return Err(CalculatorError::IntermediateOverflow);
        }

        tracing::trace!(step = index + 1, %operation, lhs, rhs, value, "chain step");
        results[index] = value;
    }

    Ok(results[CHAIN_OPERATIONS - 1])
}
