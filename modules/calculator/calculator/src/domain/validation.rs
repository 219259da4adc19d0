//! Request validation
//!
//! Rules are applied in a fixed order and the first failing rule wins:
//! 1. the operation/function name must be present and not blank
//! 2. no operand may be NaN
//! 3. no operand may be infinite
//! 4. the lowercased name must resolve to a known token

use calculator_sdk::{CalculatorError, Function, Operation, RequiredInput};

/// Arithmetic request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidCalculation {
    pub operation: Operation,
    pub first_operand: f64,
    pub second_operand: f64,
}

/// Function request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidFunctionCall {
    pub function: Function,
    pub operand: f64,
}

/// Validate a raw arithmetic request.
///
/// # Errors
/// Returns the first violated rule as a `CalculatorError`.
pub fn validate_calculation(
    first_operand: f64,
    second_operand: f64,
    operation: Option<&str>,
) -> Result<ValidCalculation, CalculatorError> {
    let token = required(operation, RequiredInput::Operation)?;
    check_operands(&[first_operand, second_operand])?;
    let operation = token.parse::<Operation>()?;

    Ok(ValidCalculation {
        operation,
        first_operand,
        second_operand,
    })
}

/// Validate a raw single-operand function request.
///
/// # Errors
/// Returns the first violated rule as a `CalculatorError`.
pub fn validate_function_call(
    operand: f64,
    function: Option<&str>,
) -> Result<ValidFunctionCall, CalculatorError> {
    let token = required(function, RequiredInput::Function)?;
    check_operands(&[operand])?;
    let function = token.parse::<Function>()?;

    Ok(ValidFunctionCall { function, operand })
}

/// Check that `value` is a non-negative integer within `limit`.
///
/// # Errors
/// `NotConvertible` for negative, fractional, or non-finite values;
/// `Conversion` when the integer exceeds `limit`.
pub fn validate_convertible(value: f64, limit: u64) -> Result<u64, CalculatorError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(CalculatorError::NotConvertible);
    }

    #[allow(clippy::cast_precision_loss)]
    let exceeds = value > limit as f64;
    if exceeds {
        return Err(CalculatorError::conversion(format!(
            "value exceeds the supported range (0 to {limit})"
        )));
    }

    // Non-negative integral value within `limit`: the cast is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let integer = value as u64;
    Ok(integer)
}

fn required(name: Option<&str>, input: RequiredInput) -> Result<&str, CalculatorError> {
    match name {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(CalculatorError::InputRequired(input)),
    }
}

fn check_operands(operands: &[f64]) -> Result<(), CalculatorError> {
    if operands.iter().any(|x| x.is_nan()) {
        return Err(CalculatorError::InvalidNumber);
    }
    if operands.iter().any(|x| x.is_infinite()) {
        return Err(CalculatorError::NumberTooLarge);
    }
    Ok(())
}
