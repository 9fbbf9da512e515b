/// Error type for Calculator operations
///
/// Operand indices and operation slots are 1-based. They are only set by
/// chain profiles; binary profiles report operands jointly.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid number format")]
    InvalidFormat { operand: Option<usize> },

    #[error("operand out of range (limit {limit})")]
    OperandOutOfRange { operand: Option<usize>, limit: f64 },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("division by zero")]
    DivisionByZero { slot: Option<usize> },

    #[error("intermediate result out of range")]
    IntermediateOverflow,

    #[error("result out of range")]
    Overflow,

    #[error("number conversion failed: {0}")]
    Conversion(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}
