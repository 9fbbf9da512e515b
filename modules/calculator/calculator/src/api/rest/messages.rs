//! Localized error messages returned in response bodies.

#![allow(clippy::non_ascii_literal)]

use calculator_sdk::{CalculatorError, Shape};

use crate::config::Locale;
use crate::domain::format::fixed_grouped;

/// Fraction digits shown for the bound in range messages.
const LIMIT_PRECISION: usize = 6;

/// Render `error` for clients.
///
/// `shape` is the shape of the profile that produced the error, if one was
/// resolved. Chain profiles report unexpected failures together with their
/// detail; binary profiles hide it.
#[must_use]
pub fn render(error: &CalculatorError, shape: Option<Shape>, locale: Locale) -> String {
    match locale {
        Locale::Ru => render_ru(error, shape),
        Locale::En => render_en(error, shape),
    }
}

fn render_ru(error: &CalculatorError, shape: Option<Shape>) -> String {
    match error {
        CalculatorError::InvalidFormat { operand: None } => "Некорректный формат числа".to_owned(),
        CalculatorError::InvalidFormat { operand: Some(n) } => {
            format!("Некорректный формат числа {n}")
        }
        CalculatorError::OperandOutOfRange {
            operand: None,
            limit,
        } => format!(
            "Число выходит за допустимый диапазон (±{})",
            fixed_grouped(*limit, LIMIT_PRECISION)
        ),
        CalculatorError::OperandOutOfRange {
            operand: Some(n), ..
        } => format!("Число {n} выходит за допустимый диапазон"),
        CalculatorError::UnknownOperation(_) => "Неизвестная операция".to_owned(),
        CalculatorError::DivisionByZero { slot: None } => "Деление на ноль невозможно".to_owned(),
        CalculatorError::DivisionByZero { slot: Some(slot) } => match slot {
            1 => "Деление на ноль в первой операции".to_owned(),
            2 => "Деление на ноль во второй операции".to_owned(),
            3 => "Деление на ноль в третьей операции".to_owned(),
            n => format!("Деление на ноль в операции {n}"),
        },
        CalculatorError::IntermediateOverflow => {
            "Переполнение в промежуточном вычислении".to_owned()
        }
        CalculatorError::Overflow => {
            "Переполнение! Результат выходит за допустимый диапазон".to_owned()
        }
        CalculatorError::Conversion(_) => "Ошибка преобразования числа".to_owned(),
        CalculatorError::Internal(detail) => match shape {
            Some(Shape::Chain) => format!("Ошибка вычисления: {detail}"),
            Some(Shape::Binary) | None => "Ошибка сервера".to_owned(),
        },
        CalculatorError::UnknownProfile(name) => {
            format!("Неизвестный профиль калькулятора: {name}")
        }
    }
}

fn render_en(error: &CalculatorError, shape: Option<Shape>) -> String {
    match error {
        CalculatorError::InvalidFormat { operand: None } => "Invalid number format".to_owned(),
        CalculatorError::InvalidFormat { operand: Some(n) } => {
            format!("Invalid format of number {n}")
        }
        CalculatorError::OperandOutOfRange {
            operand: None,
            limit,
        } => format!(
            "Number is out of the allowed range (±{})",
            fixed_grouped(*limit, LIMIT_PRECISION)
        ),
        CalculatorError::OperandOutOfRange {
            operand: Some(n), ..
        } => format!("Number {n} is out of the allowed range"),
        CalculatorError::UnknownOperation(token) => format!("Unknown operation: {token}"),
        CalculatorError::DivisionByZero { slot: None } => "Division by zero".to_owned(),
        CalculatorError::DivisionByZero { slot: Some(n) } => {
            format!("Division by zero in operation {n}")
        }
        CalculatorError::IntermediateOverflow => "Overflow in an intermediate step".to_owned(),
        CalculatorError::Overflow => "Overflow! The result is out of the allowed range".to_owned(),
        CalculatorError::Conversion(_) => "Number conversion error".to_owned(),
        CalculatorError::Internal(detail) => match shape {
            Some(Shape::Chain) => format!("Computation error: {detail}"),
            Some(Shape::Binary) | None => "Server error".to_owned(),
        },
        CalculatorError::UnknownProfile(name) => format!("Unknown calculator profile: {name}"),
    }
}
